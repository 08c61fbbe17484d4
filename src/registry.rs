//! Feature rule registry
//!
//! Maps every spelling of a feature tag to its [`FeatureRule`]. Canonical
//! `uro:` / `urf:` tags are registered under each published i-UR version
//! (`uro14:`, `uro15:`, `uro2:`, `uro3:`), both prefixed and fully qualified,
//! so elements can be looked up by their `{uri}Local` name whatever version
//! a document uses.
//!
//! The process-wide [`default_registry`] holds the bundled catalogue. It is
//! built on first use and never mutated afterwards.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use crate::catalogue;
use crate::codelist::StaticTables;
use crate::error::{Error, Result};
use crate::model::FeatureRule;
use crate::namespace::{Vocabulary, base_namespace, get_local_name, qualified_tag};
use crate::parser::path::last_step;

static DEFAULT_REGISTRY: LazyLock<Arc<Registry>> = LazyLock::new(|| {
    let registry = Registry::with_rules(catalogue::rules())
        .unwrap_or_else(|e| panic!("bundled rule catalogue is inconsistent: {}", e));
    Arc::new(registry)
});

/// The registry holding the bundled rule catalogue
pub fn default_registry() -> Arc<Registry> {
    Arc::clone(&DEFAULT_REGISTRY)
}

/// Every registered spelling of a prefixed tag
///
/// `uro:Foo` expands to `uro14:Foo`, `uro15:Foo`, `uro2:Foo` and `uro3:Foo`
/// (likewise for `urf:`); other tags are returned unchanged.
pub fn expand_prefix_variants(tag: &str) -> Vec<String> {
    if let Some((prefix, local)) = tag.split_once(':')
        && let Some(vocabulary) = Vocabulary::ALL.into_iter().find(|v| v.prefix() == prefix)
    {
        return vocabulary
            .versioned_prefixes()
            .iter()
            .map(|p| format!("{}:{}", p, local))
            .collect();
    }
    vec![tag.to_string()]
}

fn qualify(prefixed: &str) -> Result<String> {
    match prefixed.split_once(':') {
        Some((prefix, local)) => {
            let uri = base_namespace(prefix).ok_or_else(|| Error::UnknownPrefix(prefix.to_string()))?;
            Ok(format!("{{{}}}{}", uri, local))
        }
        None => Ok(prefixed.to_string()),
    }
}

/// Registry of feature rules indexed by tag
#[derive(Debug, Default)]
pub struct Registry {
    by_tag: HashMap<String, Arc<FeatureRule>>,
    by_id: HashMap<&'static str, Arc<FeatureRule>>,
    rules: Vec<Arc<FeatureRule>>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry from a list of rules
    pub fn with_rules(rules: impl IntoIterator<Item = FeatureRule>) -> Result<Self> {
        let mut registry = Self::new();
        for rule in rules {
            registry.register(rule)?;
        }
        Ok(registry)
    }

    /// Register a rule
    ///
    /// Fails without modifying the registry if the rule id is taken or any
    /// spelling of its tags is already claimed.
    pub fn register(&mut self, rule: FeatureRule) -> Result<()> {
        if self.by_id.contains_key(rule.id) {
            return Err(Error::DuplicateRuleId(rule.id.to_string()));
        }

        let mut keys: Vec<String> = Vec::new();
        for tag in rule.target_elements {
            for prefixed in expand_prefix_variants(tag) {
                let qualified = qualify(&prefixed)?;
                for key in [prefixed, qualified] {
                    if keys.contains(&key) || self.by_tag.contains_key(&key) {
                        return Err(Error::DuplicateTag(format!("{} (rule '{}')", key, rule.id)));
                    }
                    keys.push(key);
                }
            }
        }

        let rule = Arc::new(rule);
        for key in keys {
            self.by_tag.insert(key, Arc::clone(&rule));
        }
        self.by_id.insert(rule.id, Arc::clone(&rule));
        self.rules.push(rule);
        Ok(())
    }

    /// Look up a rule by prefixed (`uro3:Foo`) or qualified (`{uri}Foo`) tag
    pub fn lookup_by_tag(&self, tag: &str) -> Option<&Arc<FeatureRule>> {
        self.by_tag.get(tag)
    }

    /// Look up the rule for an element
    pub fn lookup_element(&self, node: roxmltree::Node<'_, '_>) -> Option<&Arc<FeatureRule>> {
        self.lookup_by_tag(&qualified_tag(node))
    }

    /// Look up a rule by id
    pub fn get(&self, id: &str) -> Option<&Arc<FeatureRule>> {
        self.by_id.get(id)
    }

    /// Registered rules in registration order
    pub fn rules(&self) -> impl Iterator<Item = &Arc<FeatureRule>> {
        self.rules.iter()
    }

    /// Number of registered rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check whether no rule is registered
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Check the catalogue for internal consistency
    ///
    /// - semantic part and nested attribute targets are registered
    /// - attribute names occur in their paths
    /// - referenced static code tables exist
    /// - no attribute name is declared with two datatypes
    pub fn validate(&self, tables: &StaticTables) -> Result<()> {
        let mut problems = Vec::new();

        for rule in &self.rules {
            let targets = rule
                .geometries
                .semantic_parts
                .iter()
                .chain(rule.nested_attributes.iter());
            for path in targets {
                let target = last_step(path);
                if target == "*" || target.ends_with(":*") {
                    continue;
                }
                for spelling in expand_prefix_variants(target) {
                    if !self.by_tag.contains_key(&spelling) {
                        problems.push(format!("{}: target {} is not registered", rule.id, spelling));
                    }
                }
            }

            for attr in rule.attributes() {
                if !attr.path.contains(get_local_name(attr.name)) {
                    problems.push(format!("{}: {} not in {}", rule.id, attr.name, attr.path));
                }
                for table in attr.codelist.table_names() {
                    if !tables.contains(table) {
                        problems.push(format!("{}: code table {} does not exist", rule.id, table));
                    }
                }
            }

            for name in rule.conflicting_fields() {
                problems.push(format!("{}: attribute {} declared with different datatypes", rule.id, name));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(Error::InvalidCatalogue(problems.join("; ")))
        }
    }
}
