//! Theme development guide renderer.

use crate::model::{CustomProperty, StyleCorpus};
use crate::render::{styles, NO_RESULTS};
use std::fmt::Write;

const COLOR_EXCERPT: usize = 10;
const FONT_EXCERPT: usize = 5;
const CORE_COMPONENT_EXCERPT: usize = 20;
const BLOCK_COMPONENT_EXCERPT: usize = 15;

/// Render the theme development guide.
pub fn theme_guide(corpus: &StyleCorpus) -> String {
    let mut out = String::from(
        "# Theme Development Guide\n\n\
         *Complete guide for developing themes*\n\n\
         ## Introduction\n\n\
         This guide covers the CSS architecture, available classes, variables, and\n\
         recommended practices for theme development.\n\n\
         ## Theme Customization Variables\n\n\
         ### Color Variables\n\n",
    );

    let colors: Vec<&CustomProperty> = corpus
        .custom_properties
        .iter()
        .filter(|p| p.name.contains("color"))
        .collect();
    variable_excerpt(&mut out, &colors, COLOR_EXCERPT, "color variables");

    out.push_str("### Typography Variables\n\n");
    let fonts: Vec<&CustomProperty> = corpus
        .custom_properties
        .iter()
        .filter(|p| p.name.contains("font") || p.name.contains("text"))
        .collect();
    variable_excerpt(&mut out, &fonts, FONT_EXCERPT, "typography variables");

    out.push_str("## Component Classes\n\n### Core Components\n\n");
    component_excerpt(
        &mut out,
        &styles::components_with_prefix(corpus, &["ls-", "cp__"]),
        CORE_COMPONENT_EXCERPT,
    );

    out.push_str("### Block and Page Components\n\n");
    component_excerpt(
        &mut out,
        &styles::components_with_prefix(corpus, &["block-", "page-"]),
        BLOCK_COMPONENT_EXCERPT,
    );

    out.push_str(GUIDANCE);
    out
}

/// A `:root` excerpt listing the first `limit` variables.
fn variable_excerpt(out: &mut String, variables: &[&CustomProperty], limit: usize, what: &str) {
    if variables.is_empty() {
        out.push_str(NO_RESULTS);
        out.push_str("\n\n");
        return;
    }
    out.push_str("```css\n:root {\n");
    for variable in variables.iter().take(limit) {
        let _ = writeln!(out, "  {}: {};", variable.name, variable.value);
    }
    if variables.len() > limit {
        let _ = writeln!(out, "  /* ... and {} more {} */", variables.len() - limit, what);
    }
    out.push_str("}\n```\n\n");
}

fn component_excerpt(out: &mut String, names: &[&str], limit: usize) {
    if names.is_empty() {
        out.push_str(NO_RESULTS);
        out.push_str("\n\n");
        return;
    }
    for name in names.iter().take(limit) {
        let _ = writeln!(out, "- `.{}`", name);
    }
    out.push('\n');
}

const GUIDANCE: &str = "## Theme Structure Example

```css
/* Color scheme customization */
:root {
  --ls-primary-background-color: #ffffff;
  --ls-primary-text-color: #212529;
  --ls-active-primary-color: #0d6efd;
}

/* Dark theme overrides */
.dark-theme {
  --ls-primary-background-color: #1a1a1a;
  --ls-primary-text-color: #ffffff;
}

/* Component customization */
.block-content {
  border-radius: 0.5rem;
  padding: 0.75rem;
}
```

## Best Practices

1. **Use CSS custom properties** for consistency across components
2. **Respect dark/light modes** - themes must work in both
3. **Keep specificity low** - use specific selectors only when necessary
4. **Follow naming conventions** - use the established class prefixes

## Resources

- [CSS Variables Reference](./css-variables-reference.md)
- [CSS Classes Reference](./css-classes-reference.md)
- [DOM Structure Reference](./dom-structure-reference.md)
- [Plugin API Reference](./plugin-api-reference.md)
";
