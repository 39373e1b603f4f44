//! The `MANGROVE_CHILD<N>` family.
//!
//! `MANGROVE_CHILD1(base, field1)` looks up `field1` on `base` directly. Every
//! deeper variant recovers the type reached by the variant one level up, looks
//! up its last field on that type, and passes the parent variant along so the
//! resulting name-value pair knows its full path.

use crate::depth::Depth;
use crate::error::{MacrogenError, Result};

pub const FAMILY_NAME: &str = "MANGROVE_CHILD";
const WRAP: &str = "make_nvp_with_parent";
const LOOKUP: &str = "MANGROVE_KEY_BY_VALUE";

/// `MANGROVE_CHILD3` as it must be generated. Any change to the formatting
/// rule shows up here first.
pub const REFERENCE_CHILD3: &str = "#define MANGROVE_CHILD3(base, field1, field2, field3) \
     make_nvp_with_parent(MANGROVE_KEY_BY_VALUE(&std::decay_t<typename decltype(MANGROVE_CHILD2(\
     base, field1, field2))::child_base_type>::field3), \
     MANGROVE_CHILD2(base, field1, field2))";

/// One generated variant of the child macro.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildMacro {
    depth: Depth,
    definition: String,
}

impl ChildMacro {
    pub fn new(depth: Depth) -> Self {
        let definition = match depth.parent() {
            None => format!("#define {FAMILY_NAME}1(base, field1) {LOOKUP}(&base::field1)"),
            Some(parent) => {
                let n = depth.get();
                let parent_call = invocation(parent);
                format!(
                    "#define {name}({params}) {WRAP}({LOOKUP}(&std::decay_t<typename \
                     decltype({parent_call})::child_base_type>::field{n}), {parent_call})",
                    name = name(depth),
                    params = params(depth),
                )
            }
        };
        Self { depth, definition }
    }

    pub fn depth(&self) -> Depth {
        self.depth
    }

    /// The macro name, e.g. `MANGROVE_CHILD4`.
    pub fn name(&self) -> String {
        name(self.depth)
    }

    /// `base` followed by `field1..fieldN`.
    pub fn params(&self) -> Vec<String> {
        std::iter::once("base".to_string())
            .chain(self.depth.levels().map(|i| format!("field{i}")))
            .collect()
    }

    /// How variant N+1 calls this one: the name applied to its own parameters.
    pub fn invocation(&self) -> String {
        invocation(self.depth)
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }
}

/// Generates the definition of a single variant.
///
/// Fails with [`MacrogenError::InvalidDepth`] for `n < 1`.
pub fn child_macro(n: i64) -> Result<String> {
    let depth = Depth::try_from(n)?;
    Ok(ChildMacro::new(depth).definition)
}

/// Variants `1..=max_depth`, in increasing depth order.
pub fn family(max_depth: Depth) -> Vec<ChildMacro> {
    max_depth.levels().map(ChildMacro::new).collect()
}

/// Checks the formatting rule against [`REFERENCE_CHILD3`].
///
/// Run before generating anything; a mismatch means every generated variant
/// is suspect.
pub fn self_check() -> Result<()> {
    let actual = ChildMacro::new(Depth::new(3)?).definition;
    if actual != REFERENCE_CHILD3 {
        return Err(MacrogenError::SelfTestFailure {
            expected: REFERENCE_CHILD3.to_string(),
            actual,
        });
    }
    tracing::debug!("MANGROVE_CHILD3 matches reference definition");
    Ok(())
}

fn name(depth: Depth) -> String {
    format!("{FAMILY_NAME}{depth}")
}

fn params(depth: Depth) -> String {
    let fields: Vec<String> = depth.levels().map(|i| format!("field{i}")).collect();
    format!("base, {}", fields.join(", "))
}

fn invocation(depth: Depth) -> String {
    format!("{}({})", name(depth), params(depth))
}
