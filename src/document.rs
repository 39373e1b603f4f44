//! Assembly of the generated header file.
//!
//! The document is always laid out as: fixed header, counting macros, child
//! variants `1..=D`, fixed footer. Later variants name earlier ones, so the
//! order is not configurable.

use crate::child::{self, ChildMacro};
use crate::counting::CountingMacros;
use crate::depth::Depth;
use crate::error::Result;

const HEADER: &str = r#"// clang-format off
// Copyright 2016 MongoDB Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#pragma once

#include <mangrove/config/prelude.hpp>

// Preprocessor templates for manipulating multiple arguments.
#define MANGROVE_PP_NARG(...) MANGROVE_PP_NARG_(__VA_ARGS__, MANGROVE_PP_RSEQ_N())
#define MANGROVE_PP_NARG_(...) MANGROVE_PP_ARG_N(__VA_ARGS__)
"#;

const FOOTER: &str = "\n#include <mangrove/config/postlude.hpp>\n// clang-format on\n";

/// Settings for one generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub max_depth: Depth,
}

impl GeneratorConfig {
    pub fn new(max_depth: Depth) -> Self {
        Self { max_depth }
    }
}

/// A fully generated macro header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    counting: CountingMacros,
    children: Vec<ChildMacro>,
}

impl Document {
    /// Generates the document for `config`, after checking the formatting
    /// rule against its reference.
    pub fn generate(config: &GeneratorConfig) -> Result<Self> {
        child::self_check()?;

        let max_depth = config.max_depth;
        if max_depth.exceeds_bson_limit() {
            tracing::warn!(
                %max_depth,
                "depth exceeds BSON's nesting limit of {}; \
                 deeper macros can never match a document",
                crate::depth::MAX_BSON_DEPTH
            );
        }

        let counting = CountingMacros::new(max_depth);
        let children = child::family(max_depth);
        tracing::debug!(variants = children.len(), "generated child macros");

        Ok(Self { counting, children })
    }

    pub fn max_depth(&self) -> Depth {
        self.counting.max_depth()
    }

    pub fn counting(&self) -> &CountingMacros {
        &self.counting
    }

    pub fn children(&self) -> &[ChildMacro] {
        &self.children
    }

    /// The child variants alone, each followed by a blank line.
    pub fn render_children(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            out.push_str(child.definition());
            out.push_str("\n\n");
        }
        out
    }

    /// The complete file contents.
    pub fn render(&self) -> String {
        let mut out = String::from(HEADER);
        out.push_str(&self.counting.render());
        out.push_str(&self.render_children());
        out.push_str(FOOTER);
        out
    }
}

/// Generates and renders the document for `max_depth` in one step.
pub fn generate(max_depth: Depth) -> Result<String> {
    Document::generate(&GeneratorConfig::new(max_depth)).map(|doc| doc.render())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn depth(n: usize) -> Depth {
        Depth::new(n).unwrap()
    }

    #[test]
    fn depth_one_document_is_exact() {
        let expected = format!(
            "{HEADER}\
             #define MANGROVE_PP_ARG_N(_0, _1, _2, N, ...) N\n\n\
             #define MANGROVE_PP_RSEQ_N() 3, 2, 1, 0\n\n\
             #define MANGROVE_CHILD1(base, field1) MANGROVE_KEY_BY_VALUE(&base::field1)\n\n\
             \n#include <mangrove/config/postlude.hpp>\n// clang-format on\n"
        );
        assert_eq!(generate(depth(1)).unwrap(), expected);
    }

    #[test]
    fn sections_appear_in_order() {
        let text = generate(depth(3)).unwrap();
        let pragma = text.find("#pragma once").unwrap();
        let selector = text.find("#define MANGROVE_PP_ARG_N").unwrap();
        let sequence = text.find("#define MANGROVE_PP_RSEQ_N").unwrap();
        let first = text.find("#define MANGROVE_CHILD1(").unwrap();
        let second = text.find("#define MANGROVE_CHILD2(").unwrap();
        let third = text.find("#define MANGROVE_CHILD3(").unwrap();
        let postlude = text.find("postlude.hpp").unwrap();
        assert!(pragma < selector);
        assert!(selector < sequence);
        assert!(sequence < first);
        assert!(first < second && second < third);
        assert!(third < postlude);
    }

    #[test]
    fn default_config_emits_one_hundred_variants() {
        let doc = Document::generate(&GeneratorConfig::default()).unwrap();
        assert_eq!(doc.max_depth().get(), 100);
        assert_eq!(doc.children().len(), 100);

        let text = doc.render();
        assert_eq!(text.matches("#define MANGROVE_CHILD").count(), 100);
        assert_eq!(text.matches("#define MANGROVE_PP_ARG_N(").count(), 1);
        assert_eq!(text.matches("#define MANGROVE_PP_RSEQ_N()").count(), 1);
        for n in 1..=100 {
            assert!(text.contains(&format!("#define MANGROVE_CHILD{n}(base, ")));
        }
        assert!(!text.contains("#define MANGROVE_CHILD101("));
    }

    #[test]
    fn deeper_document_extends_the_variant_section() {
        for d in [1, 2, 9, 50] {
            let shallow = Document::generate(&GeneratorConfig::new(depth(d))).unwrap();
            let deep = Document::generate(&GeneratorConfig::new(depth(d + 1))).unwrap();

            let shallow_children = shallow.render_children();
            let deep_children = deep.render_children();
            let extra = deep_children.strip_prefix(shallow_children.as_str()).unwrap();
            assert_eq!(extra, format!("{}\n\n", child::child_macro(d as i64 + 1).unwrap()));

            let deep_text = deep.render();
            assert!(deep_text.contains(&shallow_children));
        }
    }

    #[test]
    fn rendering_is_idempotent() {
        assert_eq!(generate(depth(42)).unwrap(), generate(depth(42)).unwrap());
    }

    #[test]
    fn depths_past_bson_limit_are_accepted() {
        let doc = Document::generate(&GeneratorConfig::new(depth(120))).unwrap();
        assert_eq!(doc.children().len(), 120);
        assert_eq!(doc.counting().selector_placeholders(), 122);
    }
}
