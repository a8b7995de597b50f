use crate::{Options, Project};

/// Everything a generation pass reads: the project descriptor and the options.
#[derive(Debug, Clone, Default)]
pub struct InputContext {
    pub project: Project,
    pub options: Options,
}

impl InputContext {
    pub fn new(project: Project, options: Options) -> Self {
        Self { project, options }
    }

    /// Resolve the application name.
    ///
    /// A server declaration takes precedence over the top-level name, even
    /// when the server declares no name of its own.
    pub fn declared_name(&self) -> Option<&str> {
        match &self.project.server {
            Some(server) => server.name.as_deref(),
            None => self.project.name.as_deref(),
        }
    }
}
