use serde::Serialize;

/// Ordered path patterns excluded from the pushed application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IgnoreList(Vec<String>);

impl IgnoreList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for IgnoreList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> Extend<S> for IgnoreList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_and_extend_keep_order() {
        let mut list: IgnoreList = [".build/*", "Packages/*"].into_iter().collect();
        list.extend(["logs/", "tmp/"]);

        assert_eq!(list.entries(), [".build/*", "Packages/*", "logs/", "tmp/"]);
    }
}
