//! Documentation index renderer.

/// Render the index document linking every generated file.
pub fn index() -> String {
    INDEX.to_string()
}

const INDEX: &str = "# Developer Documentation

*Generated reference documentation for plugin and theme development*

## Documentation Overview

This directory contains documentation extracted from the application source
tree to help plugin and theme developers.

## Plugin Development

### API Reference

- **[Plugin API Reference](./plugin-api-reference.md)** - TypeScript API documentation
- **[Plugin API Definitions JSON](./plugin-api-definitions.json)** - machine-readable API definitions
- **[API Functionality Analysis](./api-functionality-analysis.md)** - analysis of the core API
- **[API Showcase](./api-showcase.md)** - practical examples and use cases
- **[API Analysis Data](./api-analysis-data.json)** - machine-readable analysis data

## Theme Development

### CSS Reference

- **[CSS Variables Reference](./css-variables-reference.md)** - customizable CSS variables
- **[CSS Classes Reference](./css-classes-reference.md)** - complete class reference
- **[DOM Structure Reference](./dom-structure-reference.md)** - structure and data attributes

### Development Guide

- **[Theme Development Guide](./theme-development-guide.md)** - complete theme development guide

## Keeping Documentation Updated

Regenerate whenever plugin APIs are added, the CSS structure changes, or UI
components are modified. Output is derived entirely from the current source
tree; stale documents are simply overwritten.
";
