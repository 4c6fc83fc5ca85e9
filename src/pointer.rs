use crate::config::FollowerConfig;

const INTERACTIVE_TAGS: [&str; 2] = ["a", "button"];
const INTERACTIVE_ROLES: [&str; 2] = ["link", "button"];

pub const GROW_CLASS: &str = "blob-grow";

/// Minimal view of a rendered element, enough to walk towards the root.
pub trait InteractiveNode: Sized {
    fn tag_name(&self) -> String;
    fn role(&self) -> Option<String>;
    fn parent(&self) -> Option<Self>;
}

fn is_interactive_element(node: &impl InteractiveNode) -> bool {
    let tag = node.tag_name().to_ascii_lowercase();
    if INTERACTIVE_TAGS.contains(&tag.as_str()) {
        return true;
    }

    node.role()
        .map(|role| role.trim().to_ascii_lowercase())
        .is_some_and(|role| INTERACTIVE_ROLES.contains(&role.as_str()))
}

/// True if `node` or any of its ancestors is a link or a button.
pub fn within_interactive<N: InteractiveNode>(node: N) -> bool {
    let mut current = Some(node);
    while let Some(node) = current {
        if is_interactive_element(&node) {
            return true;
        }
        current = node.parent();
    }
    false
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillMode {
    Forwards,
}

impl FillMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Forwards => "forwards",
        }
    }
}

/// One animation request for the aurora blob.
#[derive(Clone, Debug, PartialEq)]
pub struct FollowerFrame {
    pub left: f64,
    pub top: f64,
    pub duration_ms: u32,
    pub fill: FillMode,
    pub grow: bool,
}

impl FollowerFrame {
    pub fn left_css(&self) -> String {
        format!("{}px", self.left)
    }

    pub fn top_css(&self) -> String {
        format!("{}px", self.top)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PointerFollower {
    config: FollowerConfig,
}

impl PointerFollower {
    pub fn new(config: FollowerConfig) -> Self {
        Self { config }
    }

    pub fn frame<N: InteractiveNode>(&self, client_x: i32, client_y: i32, target: Option<N>) -> FollowerFrame {
        FollowerFrame {
            left: f64::from(client_x),
            top: f64::from(client_y),
            duration_ms: self.config.duration_ms,
            fill: FillMode::Forwards,
            grow: target.is_some_and(within_interactive),
        }
    }
}
