use std::fmt;
use std::str::FromStr;

/// Target runtime for the built image, one of the tags the image service
/// accepts. The wire format is the Docker-style `runtime:version` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TechStack {
    #[default]
    Python38,
    Python39,
    Python312,
    Node14,
    Node16,
    Node18,
    Java11,
    Java17,
    Java19,
}

impl TechStack {
    /// Every supported stack, in the order the service documents them.
    pub const ALL: [TechStack; 9] = [
        TechStack::Python38,
        TechStack::Python39,
        TechStack::Python312,
        TechStack::Node14,
        TechStack::Node16,
        TechStack::Node18,
        TechStack::Java11,
        TechStack::Java17,
        TechStack::Java19,
    ];

    /// The tag sent in the `tech_stack` form field.
    pub fn as_tag(&self) -> &'static str {
        match self {
            TechStack::Python38 => "python:3.8",
            TechStack::Python39 => "python:3.9",
            TechStack::Python312 => "python:3.12",
            TechStack::Node14 => "node:14",
            TechStack::Node16 => "node:16",
            TechStack::Node18 => "node:18",
            TechStack::Java11 => "java:11",
            TechStack::Java17 => "java:17",
            TechStack::Java19 => "java:19",
        }
    }
}

impl fmt::Display for TechStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for TechStack {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TechStack::ALL
            .iter()
            .copied()
            .find(|stack| stack.as_tag() == s)
            .ok_or_else(|| crate::Error::UnknownTechStack {
                tag: s.to_owned(),
                supported: TechStack::ALL
                    .iter()
                    .map(|stack| stack.as_tag().to_owned())
                    .collect(),
            })
    }
}
