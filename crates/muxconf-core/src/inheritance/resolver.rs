use log::debug;

use crate::inheritance::declarations::Declarations;

/// Folds base and derived declarations into one set
#[derive(Debug, Default, Clone, Copy)]
pub struct InheritanceResolver;

impl InheritanceResolver {
    /// Derived entries replace base entries with the same key in place;
    /// derived-only entries are appended in their own order.
    pub fn resolve(base: &Declarations, derived: &Declarations) -> Declarations {
        let mut merged = base.clone();
        override_by_key(merged.groups_mut(), derived.groups(), |g| g.name.as_str(), "group");
        override_by_key(merged.plugins_mut(), derived.plugins(), |p| p.id.as_str(), "plugin");
        override_by_key(merged.scripts_mut(), derived.scripts(), |s| s.name.as_str(), "script");
        merged
    }

    /// Resolves `chain` from root (first) to leaf (last).
    pub fn resolve_chain<'a, I>(chain: I) -> Declarations
    where
        I: IntoIterator<Item = &'a Declarations>,
    {
        chain
            .into_iter()
            .fold(Declarations::new(), |merged, next| Self::resolve(&merged, next))
    }
}

fn override_by_key<T, K>(merged: &mut Vec<T>, derived: &[T], key: K, kind: &str)
where
    T: Clone,
    K: Fn(&T) -> &str,
{
    for item in derived {
        match merged.iter().position(|m| key(m) == key(item)) {
            Some(pos) => {
                debug!("Derived {} '{}' replaces base definition", kind, key(item));
                merged[pos] = item.clone();
            }
            None => merged.push(item.clone()),
        }
    }
}
