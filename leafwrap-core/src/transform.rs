//! Depth-limited substitution of leaf values
//!
//! Only objects are traversed. Every non-object value found while rewriting an
//! object is replaced by a [`WrapperRecord`]; object-valued children are
//! rewritten with one level less budget. An object reached with an exhausted
//! budget is copied through untouched, and a non-object root is returned as-is.

use crate::depth::DepthBudget;
use crate::error::{Result, TransformError};
use crate::limits::TransformLimits;
use crate::record::{WrapperKeys, WrapperRecord};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info, trace};

/// Counters collected during one transformation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransformStats {
    /// Leaf values replaced by wrapper records
    pub leaves_wrapped: usize,
    /// Objects rewritten
    pub objects_visited: usize,
    /// Objects copied through because the budget ran out
    pub boundary_objects: usize,
    /// Deepest object level rewritten (root is 0)
    pub max_level_reached: usize,
}

/// Configured substitution transformer
#[derive(Debug, Clone, Default)]
pub struct Transformer {
    keys: WrapperKeys,
    limits: TransformLimits,
}

impl Transformer {
    /// Create a transformer, validating keys and limits
    pub fn new(keys: WrapperKeys, limits: TransformLimits) -> Result<Self> {
        keys.validate()?;
        limits.validate()?;
        Ok(Self { keys, limits })
    }

    /// Transform `node` into a new tree
    pub fn transform(&self, node: &Value, depth: DepthBudget) -> Result<Value> {
        self.transform_with_stats(node, depth).map(|(value, _)| value)
    }

    /// Transform `node`, also returning traversal counters
    pub fn transform_with_stats(
        &self,
        node: &Value,
        depth: DepthBudget,
    ) -> Result<(Value, TransformStats)> {
        let mut walk = Walk {
            transformer: self,
            stats: TransformStats::default(),
            path: Vec::new(),
        };
        let value = walk.run(node, depth)?;

        debug!(
            depth = %depth,
            leaves_wrapped = walk.stats.leaves_wrapped,
            objects_visited = walk.stats.objects_visited,
            "transform complete"
        );
        if walk.stats.boundary_objects > 0 {
            info!(
                depth = %depth,
                boundary_objects = walk.stats.boundary_objects,
                "depth budget exhausted; nested objects left unchanged"
            );
        }

        Ok((value, walk.stats))
    }
}

/// Transform `node` with default wrapper keys and limits
pub fn transform(node: &Value, depth: DepthBudget) -> Result<Value> {
    Transformer::default().transform(node, depth)
}

/// One object being rewritten
struct Frame<'a> {
    /// Key under which the finished object is inserted into its parent
    key: &'a str,
    entries: serde_json::map::Iter<'a>,
    rewritten: Map<String, Value>,
    budget: DepthBudget,
    level: usize,
}

/// Explicit-stack traversal; native stack use stays constant with nesting.
struct Walk<'a> {
    transformer: &'a Transformer,
    stats: TransformStats,
    path: Vec<&'a str>,
}

impl<'a> Walk<'a> {
    fn run(&mut self, node: &'a Value, budget: DepthBudget) -> Result<Value> {
        let map = match node {
            Value::Object(map) => map,
            other => return Ok(other.clone()),
        };

        if budget.is_exhausted() {
            self.stats.boundary_objects += 1;
            return Ok(node.clone());
        }

        let mut parents: Vec<Frame<'a>> = Vec::new();
        let mut current = self.enter("", map, budget, 0)?;

        loop {
            let Some((key, value)) = current.entries.next() else {
                let Frame { key, rewritten, .. } = current;
                let finished = Value::Object(rewritten);
                match parents.pop() {
                    Some(mut parent) => {
                        self.path.pop();
                        parent.rewritten.insert(key.to_string(), finished);
                        current = parent;
                        continue;
                    }
                    None => return Ok(finished),
                }
            };

            let child = match value {
                Value::Object(child) => child,
                leaf => {
                    self.stats.leaves_wrapped += 1;
                    let record = WrapperRecord::new(leaf).into_value(&self.transformer.keys);
                    current.rewritten.insert(key.clone(), record);
                    continue;
                }
            };

            let child_budget = current.budget.descend();
            if child_budget.is_exhausted() {
                self.stats.boundary_objects += 1;
                current.rewritten.insert(key.clone(), value.clone());
                continue;
            }

            self.path.push(key);
            let frame = self.enter(key, child, child_budget, current.level + 1)?;
            parents.push(std::mem::replace(&mut current, frame));
        }
    }

    fn enter(
        &mut self,
        key: &'a str,
        map: &'a Map<String, Value>,
        budget: DepthBudget,
        level: usize,
    ) -> Result<Frame<'a>> {
        let max_nesting = self.transformer.limits.max_nesting;
        if level >= max_nesting {
            return Err(TransformError::NestingLimitExceeded {
                level,
                max_nesting,
                path: self.pointer(),
            });
        }

        self.stats.objects_visited += 1;
        self.stats.max_level_reached = self.stats.max_level_reached.max(level);
        trace!(level, keys = map.len(), "rewriting object");

        Ok(Frame {
            key,
            entries: map.iter(),
            rewritten: Map::with_capacity(map.len()),
            budget,
            level,
        })
    }

    /// JSON Pointer (RFC 6901) of the object currently being entered
    fn pointer(&self) -> String {
        self.path
            .iter()
            .map(|token| format!("/{}", token.replace('~', "~0").replace('/', "~1")))
            .collect()
    }
}
