//! Fundamental types shared across cfkit crates.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Backend platforms a project can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Platform {
    /// Node.js
    Node,
    /// Swift (Kitura)
    Swift,
    /// Java on Open Liberty
    Java,
    /// Spring Boot
    Spring,
    /// Python (Flask)
    Python,
}

impl Platform {
    /// All supported platforms, in the order they are listed to users.
    pub const ALL: [Platform; 5] = [
        Platform::Node,
        Platform::Swift,
        Platform::Java,
        Platform::Spring,
        Platform::Python,
    ];

    /// Returns the platform tag as it appears in project descriptors.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Node => "NODE",
            Platform::Swift => "SWIFT",
            Platform::Java => "JAVA",
            Platform::Spring => "SPRING",
            Platform::Python => "PYTHON",
        }
    }

    /// Whether the platform builds a JVM artifact (Liberty or Spring).
    pub fn is_java(&self) -> bool {
        matches!(self, Platform::Java | Platform::Spring)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "language '{}' was not one of the valid languages: NODE, SWIFT, JAVA, SPRING or PYTHON",
                    s
                )
            })
    }
}

/// Build tool used by Java and Spring projects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildType {
    #[default]
    Maven,
    Gradle,
}

impl BuildType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildType::Maven => "maven",
            BuildType::Gradle => "gradle",
        }
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BuildType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "maven" => Ok(BuildType::Maven),
            "gradle" => Ok(BuildType::Gradle),
            _ => Err(format!(
                "unknown build type '{}', expected 'maven' or 'gradle'",
                s
            )),
        }
    }
}

/// How the delivery toolchain obtains the source repository.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RepoType {
    /// Clone the generated code into a new repository
    #[default]
    Clone,
    /// Link an existing repository
    Link,
}

impl RepoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepoType::Clone => "clone",
            RepoType::Link => "link",
        }
    }
}

impl fmt::Display for RepoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RepoType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "clone" => Ok(RepoType::Clone),
            "link" => Ok(RepoType::Link),
            _ => Err(format!(
                "unknown repository type '{}', expected 'clone' or 'link'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_from_str() {
        assert_eq!(Platform::from_str("NODE").unwrap(), Platform::Node);
        assert_eq!(Platform::from_str("SWIFT").unwrap(), Platform::Swift);
        assert_eq!(Platform::from_str("JAVA").unwrap(), Platform::Java);
        assert_eq!(Platform::from_str("SPRING").unwrap(), Platform::Spring);
        assert_eq!(Platform::from_str("PYTHON").unwrap(), Platform::Python);
    }

    #[test]
    fn test_platform_from_str_is_exact() {
        let err = Platform::from_str("node").unwrap_err();
        assert!(err.contains("'node'"));

        let err = Platform::from_str("RUBY").unwrap_err();
        assert_eq!(
            err,
            "language 'RUBY' was not one of the valid languages: NODE, SWIFT, JAVA, SPRING or PYTHON"
        );
    }

    #[test]
    fn test_platform_display_round_trips() {
        for platform in Platform::ALL {
            assert_eq!(platform.to_string().parse::<Platform>().unwrap(), platform);
        }
    }

    #[test]
    fn test_is_java() {
        assert!(Platform::Java.is_java());
        assert!(Platform::Spring.is_java());
        assert!(!Platform::Node.is_java());
        assert!(!Platform::Swift.is_java());
        assert!(!Platform::Python.is_java());
    }

    #[test]
    fn test_build_type() {
        assert_eq!(BuildType::default(), BuildType::Maven);
        assert_eq!(BuildType::from_str("gradle").unwrap(), BuildType::Gradle);
        assert_eq!(BuildType::from_str("Maven").unwrap(), BuildType::Maven);
        assert!(BuildType::from_str("ant").is_err());
        assert_eq!(BuildType::Gradle.to_string(), "gradle");
    }

    #[test]
    fn test_repo_type() {
        assert_eq!(RepoType::default(), RepoType::Clone);
        assert_eq!(RepoType::from_str("link").unwrap(), RepoType::Link);
        assert!(RepoType::from_str("fork").is_err());
        assert_eq!(RepoType::Clone.to_string(), "clone");
    }

    #[test]
    fn test_deserialize() {
        let platform: Platform = serde_json::from_str(r#""SPRING""#).unwrap();
        assert_eq!(platform, Platform::Spring);

        let build: BuildType = serde_json::from_str(r#""gradle""#).unwrap();
        assert_eq!(build, BuildType::Gradle);

        let repo: RepoType = serde_json::from_str(r#""link""#).unwrap();
        assert_eq!(repo, RepoType::Link);
    }
}
