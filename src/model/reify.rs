//! Reification cache (Design Notes, §9): an integer equality `var = value`
//! is tied to a fresh boolean through an enforce-if pair —
//! `b ⇒ var = value` and `¬b ⇒ var ≠ value` — and the same `(site, class,
//! day, hour, value)` equality is never reified twice within one solve.

use std::collections::HashMap;

use cp_sat::builder::{BoolVar, CpModelBuilder, IntVar};

/// Distinguishes which integer-variable family a slot coordinate refers to,
/// since `subject` and `teacher` share the same `(class, day, hour)` index space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Site {
    Subject,
    Teacher,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ReifyKey {
    site: Site,
    class: usize,
    day: u32,
    hour: u32,
    value: i64,
}

#[derive(Default)]
pub struct ReifyCache {
    cache: HashMap<ReifyKey, BoolVar>,
}

impl ReifyCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the boolean `b` with `b ⇒ var = value` and `¬b ⇒ var ≠ value`,
    /// reifying it into the model on first use and reusing the cached
    /// boolean on every subsequent call with the same key.
    #[allow(clippy::too_many_arguments)]
    pub fn eq_bool(
        &mut self,
        model: &mut CpModelBuilder,
        site: Site,
        class: usize,
        day: u32,
        hour: u32,
        var: &IntVar,
        value: i64,
    ) -> BoolVar {
        let key = ReifyKey {
            site,
            class,
            day,
            hour,
            value,
        };
        if let Some(b) = self.cache.get(&key) {
            return b.clone();
        }
        let b = model.new_bool_var();
        model.add_eq(var.clone(), value).only_enforce_if(b.clone());
        model.add_ne(var.clone(), value).only_enforce_if(!b.clone());
        self.cache.insert(key, b.clone());
        b
    }
}

/// Reifies `a ∧ b` as a fresh boolean (no caching: each call site needs its
/// own conjunction variable).
pub fn reify_and(model: &mut CpModelBuilder, a: &BoolVar, b: &BoolVar) -> BoolVar {
    let out = model.new_bool_var();
    model.add_bool_and([a.clone(), b.clone()]).only_enforce_if(out.clone());
    model.add_bool_or([!a.clone(), !b.clone()]).only_enforce_if(!out.clone());
    out
}

/// Reifies `∃ v ∈ vars : v` (logical OR over a slice of booleans).
pub fn reify_or(model: &mut CpModelBuilder, vars: &[BoolVar]) -> BoolVar {
    let out = model.new_bool_var();
    model.add_bool_or(vars.iter().cloned()).only_enforce_if(out.clone());
    model
        .add_bool_and(vars.iter().map(|v| !v.clone()))
        .only_enforce_if(!out.clone());
    out
}
