//! Route paths and HTTP methods as entered by the user.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// HTTP methods an endpoint file can be scaffolded for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    /// Prompt order
    pub const ALL: [HttpMethod; 5] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Patch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
            HttpMethod::Patch => "patch",
        }
    }

    pub fn as_upper(&self) -> String {
        self.as_str().to_uppercase()
    }

    /// Whether requests with this method carry a body worth a schema file
    pub fn accepts_body(&self) -> bool {
        !matches!(self, HttpMethod::Get | HttpMethod::Delete)
    }
}

impl FromStr for HttpMethod {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "get" => Ok(HttpMethod::Get),
            "post" => Ok(HttpMethod::Post),
            "put" => Ok(HttpMethod::Put),
            "delete" => Ok(HttpMethod::Delete),
            "patch" => Ok(HttpMethod::Patch),
            other => Err(CoreError::validation(format!(
                "Invalid HTTP method: {}. Use get, post, put, delete, or patch",
                other
            ))),
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated endpoint route such as `/members/:memberId`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    path: String,
}

impl Route {
    pub const MISSING_SLASH: &'static str = r#"Invalid route. Please start the route with a "/". For example, use "/members" instead of "members"."#;
    pub const UNDERSCORE_PARAM: &'static str = r#"Invalid route. Please use ":" instead of "_" for route parameters. For example, use "/:memberId" instead of "/_memberId"."#;
    pub const DOT_SEGMENT: &'static str = r#"Invalid route. Please do not use "." or ".." as a route segment. For example, use "/members" instead of "/../members"."#;

    pub fn parse(input: &str) -> Result<Self, CoreError> {
        Self::check(input).map_err(CoreError::validation)?;
        Ok(Self {
            path: input.to_string(),
        })
    }

    /// Returns the user-facing message for an invalid route. Shared with the
    /// interactive prompt validator.
    pub fn check(input: &str) -> Result<(), &'static str> {
        if !input.starts_with('/') {
            return Err(Self::MISSING_SLASH);
        }
        if input.contains("/_") {
            return Err(Self::UNDERSCORE_PARAM);
        }
        if input.split('/').any(|segment| segment == "." || segment == "..") {
            return Err(Self::DOT_SEGMENT);
        }
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Directory name under the routes folder: `:` becomes `_` and the
    /// leading slash is dropped. `check` rejects `.` and `..` segments, so
    /// the result joins below the routes directory.
    pub fn dir_name(&self) -> String {
        self.path.replace(':', "_").trim_start_matches('/').to_string()
    }

    /// Names of the `:param` segments, in route order
    pub fn params(&self) -> Vec<&str> {
        self.path
            .split('/')
            .filter_map(|segment| segment.strip_prefix(':'))
            .collect()
    }
}

impl FromStr for Route {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)
    }
}
