//! Element path evaluation
//!
//! Rules address sub-elements with a small subset of ElementPath syntax:
//!
//! - `./a:b/c:d` selects children step by step
//! - `//` before a step selects descendants instead of children
//! - `*` matches any element, `p:*` any element in the namespace of `p`
//! - a leading `.//` selects descendants of the context element
//!
//! Prefixes are resolved through the document's [`Namespace`] binding, so
//! `uro:` in a rule follows whichever i-UR version the document uses.
//! Results are in document order without duplicates.

use std::collections::HashSet;

use roxmltree::Node;

use crate::error::{Error, Result};
use crate::namespace::{GML_NS, Namespace};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Axis {
    Child,
    Descendant,
}

#[derive(Debug, Clone, PartialEq)]
enum NameTest<'p> {
    Any,
    AnyIn(&'p str),
    Name(Option<&'p str>, &'p str),
}

#[derive(Debug, Clone, PartialEq)]
struct Step<'p> {
    axis: Axis,
    test: NameTest<'p>,
}

fn parse_steps<'p>(path: &'p str, ns: &'p Namespace) -> Result<Vec<Step<'p>>> {
    let (mut axis, rest) = if let Some(rest) = path.strip_prefix(".//") {
        (Axis::Descendant, rest)
    } else if let Some(rest) = path.strip_prefix("./") {
        (Axis::Child, rest)
    } else if path == "." {
        return Ok(Vec::new());
    } else {
        (Axis::Child, path)
    };

    let mut steps = Vec::new();
    for segment in rest.split('/') {
        match segment {
            "" => axis = Axis::Descendant,
            "." => {}
            "*" => {
                steps.push(Step { axis, test: NameTest::Any });
                axis = Axis::Child;
            }
            _ => {
                let test = match segment.split_once(':') {
                    Some((prefix, local)) => {
                        let uri = ns
                            .uri(prefix)
                            .ok_or_else(|| Error::UnknownPrefix(format!("{} (in path '{}')", prefix, path)))?;
                        if local == "*" {
                            NameTest::AnyIn(uri)
                        } else {
                            NameTest::Name(Some(uri), local)
                        }
                    }
                    None => NameTest::Name(None, segment),
                };
                steps.push(Step { axis, test });
                axis = Axis::Child;
            }
        }
    }
    Ok(steps)
}

fn node_matches(node: &Node<'_, '_>, test: &NameTest<'_>) -> bool {
    if !node.is_element() {
        return false;
    }
    let tag = node.tag_name();
    match test {
        NameTest::Any => true,
        NameTest::AnyIn(uri) => tag.namespace() == Some(*uri),
        NameTest::Name(uri, local) => tag.namespace() == *uri && tag.name() == *local,
    }
}

/// Select all elements matching `path` relative to `node`
pub fn select<'a, 'input>(node: Node<'a, 'input>, path: &str, ns: &Namespace) -> Result<Vec<Node<'a, 'input>>> {
    let steps = parse_steps(path, ns)?;
    let mut current = vec![node];

    for step in &steps {
        let mut next = Vec::new();
        let mut seen = HashSet::new();
        for ctx in &current {
            match step.axis {
                Axis::Child => {
                    for child in ctx.children().filter(|n| node_matches(n, &step.test)) {
                        if seen.insert(child.id()) {
                            next.push(child);
                        }
                    }
                }
                Axis::Descendant => {
                    for desc in ctx.descendants().skip(1).filter(|n| node_matches(n, &step.test)) {
                        if seen.insert(desc.id()) {
                            next.push(desc);
                        }
                    }
                }
            }
        }
        if current.len() > 1 {
            next.sort_by_key(|n| n.range().start);
        }
        current = next;
        if current.is_empty() {
            break;
        }
    }

    Ok(current)
}

/// First element matching `path` in document order
pub fn find<'a, 'input>(node: Node<'a, 'input>, path: &str, ns: &Namespace) -> Result<Option<Node<'a, 'input>>> {
    Ok(select(node, path, ns)?.into_iter().next())
}

/// Check whether any element matches `path`
pub fn exists(node: Node<'_, '_>, path: &str, ns: &Namespace) -> Result<bool> {
    Ok(find(node, path, ns)?.is_some())
}

/// Last step of a path (e.g. `bldg:WallSurface` for `./bldg:boundedBy/bldg:WallSurface`)
pub fn last_step(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// `gml:id` of an element
pub fn gml_id<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    node.attribute((GML_NS, "id"))
}

/// Text content of an element; `None` when it has no leading text
pub fn element_text<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    node.text()
}

/// All descendant text of an element, whitespace-collapsed
pub fn collapsed_text(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
