//! Built-in symbol table for the terminal REPL
//!
//! A fixed subset of `clojure.core` with argument lists and one-line
//! descriptions. It serves both completion and documentation lookups.

use async_trait::async_trait;

use crate::editor::{AsyncCompletionSource, Candidate};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CoreVar {
    name: &'static str,
    arglists: &'static str,
    doc: &'static str,
}

const fn var(name: &'static str, arglists: &'static str, doc: &'static str) -> CoreVar {
    CoreVar {
        name,
        arglists,
        doc,
    }
}

const CORE_VARS: &[CoreVar] = &[
    var("apply", "([f args] [f x & args])", "Calls f with the elements of args as arguments."),
    var("assoc", "([map key val] [map key val & kvs])", "Returns a map with key mapped to val."),
    var("assoc-in", "([m [k & ks] v])", "Associates a value in a nested structure."),
    var("comp", "([] [f] [f g] [f g & fs])", "Composes functions right to left."),
    var("concat", "([] [x] [x y] [x y & zs])", "Lazy concatenation of the given collections."),
    var("conj", "([] [coll] [coll x] [coll x & xs])", "Adds items to a collection."),
    var("cons", "([x seq])", "Returns a seq with x prepended."),
    var("count", "([coll])", "Number of items in the collection."),
    var("dec", "([x])", "Returns x minus one."),
    var("defn", "([name doc-string? attr-map? [params*] body])", "Defines a named function."),
    var("dissoc", "([map] [map key] [map key & ks])", "Returns a map without the given keys."),
    var("doseq", "([seq-exprs & body])", "Runs body for side effects over a sequence."),
    var("filter", "([pred] [pred coll])", "Lazy seq of the items for which pred is true."),
    var("filterv", "([pred coll])", "Vector of the items for which pred is true."),
    var("first", "([coll])", "First item of the collection."),
    var("fnil", "([f x] [f x y] [f x y z])", "Wraps f to replace nil arguments."),
    var("frequencies", "([coll])", "Map from distinct items to their counts."),
    var("get", "([map key] [map key not-found])", "Value mapped to key, or not-found."),
    var("get-in", "([m ks] [m ks not-found])", "Value in a nested structure."),
    var("group-by", "([f coll])", "Map from f of items to vectors of those items."),
    var("identity", "([x])", "Returns its argument."),
    var("if-let", "([bindings then] [bindings then else])", "Binds and branches on the test value."),
    var("inc", "([x])", "Returns x plus one."),
    var("interleave", "([] [c1] [c1 c2] [c1 c2 & colls])", "Lazy seq alternating the given colls."),
    var("interpose", "([sep] [sep coll])", "Lazy seq of items separated by sep."),
    var("into", "([] [to] [to from] [to xform from])", "Adds all items of from into to."),
    var("juxt", "([f] [f g] [f g h] [f g h & fs])", "Vector of the results of each function."),
    var("keep", "([f] [f coll])", "Lazy seq of the non-nil results of f."),
    var("keys", "([map])", "Seq of the map's keys."),
    var("last", "([coll])", "Last item of the collection, in linear time."),
    var("let", "([bindings & body])", "Evaluates body with local bindings."),
    var("map", "([f] [f coll] [f c1 c2] [f c1 c2 c3])", "Lazy seq of f applied to each item."),
    var("map-indexed", "([f] [f coll])", "Like map, with the index as first argument."),
    var("mapcat", "([f] [f & colls])", "Concatenation of the results of map."),
    var("mapv", "([f coll] [f c1 c2] [f c1 c2 c3])", "Vector of f applied to each item."),
    var("max", "([x] [x y] [x y & more])", "Greatest of the numbers."),
    var("max-key", "([k x] [k x y] [k x y & more])", "Item for which (k item) is greatest."),
    var("merge", "([& maps])", "Map of all entries, later maps winning."),
    var("merge-with", "([f & maps])", "Merges maps, combining clashes with f."),
    var("min", "([x] [x y] [x y & more])", "Least of the numbers."),
    var("nth", "([coll index] [coll index not-found])", "Item at index."),
    var("partial", "([f] [f arg1] [f arg1 arg2] [f arg1 arg2 & more])", "Fixes leading arguments of f."),
    var("partition", "([n coll] [n step coll] [n step pad coll])", "Lazy seq of lists of n items."),
    var("println", "([& more])", "Prints the arguments followed by a newline."),
    var("range", "([] [end] [start end] [start end step])", "Lazy seq of numbers."),
    var("reduce", "([f coll] [f val coll])", "Folds coll with f."),
    var("reduce-kv", "([f init coll])", "Folds an associative collection with f."),
    var("remove", "([pred] [pred coll])", "Lazy seq of the items for which pred is false."),
    var("rest", "([coll])", "Seq of the items after the first."),
    var("reverse", "([coll])", "Seq of the items in reverse order."),
    var("some", "([pred coll])", "First truthy value of pred over coll."),
    var("sort", "([coll] [comp coll])", "Sorted seq of the items."),
    var("sort-by", "([keyfn coll] [keyfn comp coll])", "Items sorted by keyfn."),
    var("str", "([] [x] [x & ys])", "Concatenated string forms of the arguments."),
    var("take", "([n] [n coll])", "Lazy seq of the first n items."),
    var("update", "([m k f] [m k f & args])", "Updates the value at k with f."),
    var("update-in", "([m ks f & args])", "Updates a value in a nested structure."),
    var("vals", "([map])", "Seq of the map's values."),
    var("when", "([test & body])", "Evaluates body when test is truthy."),
    var("when-let", "([bindings & body])", "Binds and evaluates body when the value is truthy."),
    var("zipmap", "([keys vals])", "Map built from paired keys and values."),
];

/// Completion and documentation source over the built-in symbols
#[derive(Debug, Clone)]
pub struct SymbolTable {
    vars: Vec<CoreVar>,
}

impl SymbolTable {
    /// Table holding the built-in `clojure.core` subset
    pub fn core() -> Self {
        Self {
            vars: CORE_VARS.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Symbols starting with `fragment`, shortest first
    pub fn matches(&self, fragment: &str) -> Vec<Candidate<String>> {
        let mut found: Vec<&CoreVar> = self
            .vars
            .iter()
            .filter(|v| v.name.starts_with(fragment))
            .collect();
        found.sort_by_key(|v| (v.name.len(), v.name));

        found
            .into_iter()
            .map(|v| Candidate::new(v.name.to_string(), v.name, v.name))
            .collect()
    }

    /// One-line documentation for a symbol
    pub fn docs(&self, name: &str) -> Option<String> {
        self.vars
            .iter()
            .find(|v| v.name == name)
            .map(|v| format!("{} {}  {}", v.name, v.arglists, v.doc))
    }
}

#[async_trait]
impl AsyncCompletionSource<String> for SymbolTable {
    async fn complete(&self, fragment: &str) -> Result<Vec<Candidate<String>>> {
        Ok(self.matches(fragment))
    }
}
