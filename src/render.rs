//! ASCII tree rendering for capability hierarchies.

use std::collections::{HashMap, HashSet};

use crate::models::Capability;

/// A capability with its nested children, assembled from parent pointers.
#[derive(Debug, Clone)]
pub struct CapabilityTreeNode {
    pub capability: Capability,
    pub children: Vec<CapabilityTreeNode>,
}

/// Assemble a forest from a flat capability list.
///
/// A capability is a root when it has no parent, when its parent is not in
/// the list (a filtered list that skipped hierarchy preservation), or when it
/// points at itself. Sibling order follows list order.
pub fn build_tree(capabilities: &[Capability]) -> Vec<CapabilityTreeNode> {
    let present: HashSet<&str> = capabilities.iter().map(|c| c.id.as_str()).collect();
    let mut children_of: HashMap<&str, Vec<&Capability>> = HashMap::new();
    let mut roots: Vec<&Capability> = Vec::new();

    for capability in capabilities {
        let parent = capability
            .parent_id
            .as_deref()
            .filter(|p| present.contains(p) && *p != capability.id);
        match parent {
            Some(parent_id) => children_of.entry(parent_id).or_default().push(capability),
            None => roots.push(capability),
        }
    }

    roots
        .into_iter()
        .map(|root| attach_children(root, &children_of))
        .collect()
}

fn attach_children(
    capability: &Capability,
    children_of: &HashMap<&str, Vec<&Capability>>,
) -> CapabilityTreeNode {
    let children = children_of
        .get(capability.id.as_str())
        .map(|children| {
            children
                .iter()
                .map(|child| attach_children(child, children_of))
                .collect()
        })
        .unwrap_or_default();
    CapabilityTreeNode {
        capability: capability.clone(),
        children,
    }
}

/// Render a capability forest as ASCII art.
///
/// Example output:
/// ```text
/// Customer Management
/// ├── Onboarding
/// │   ├── Identity Verification
/// │   └── Account Provisioning
/// └── Support
/// ```
pub fn render_tree(nodes: &[CapabilityTreeNode]) -> String {
    let mut output = String::new();
    for (i, node) in nodes.iter().enumerate() {
        let is_last = i == nodes.len() - 1;
        render_node(&mut output, node, "", is_last, true);
    }
    output
}

fn render_node(
    output: &mut String,
    node: &CapabilityTreeNode,
    prefix: &str,
    is_last: bool,
    is_root: bool,
) {
    if is_root {
        // Root nodes: just the name, no branch characters
        output.push_str(&node.capability.name);
        output.push('\n');
    } else {
        let branch = if is_last { "└── " } else { "├── " };
        output.push_str(prefix);
        output.push_str(branch);
        output.push_str(&node.capability.name);
        output.push('\n');
    }

    let child_prefix = if is_root {
        String::new()
    } else {
        let continuation = if is_last { "    " } else { "│   " };
        format!("{}{}", prefix, continuation)
    };

    for (i, child) in node.children.iter().enumerate() {
        let child_is_last = i == node.children.len() - 1;
        render_node(output, child, &child_prefix, child_is_last, false);
    }
}
