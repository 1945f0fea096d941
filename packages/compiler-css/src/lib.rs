//! Static stylesheet emitted next to every exported `index.html`.
//!
//! The sheet styles the fixed classes the HTML compiler puts on each node
//! (`section`, `heading`, `text`, `image-container`, `image`, `button`).
//! Instance styling lives in inline `style` attributes, so nothing here
//! depends on the schema.

/// File name the HTML document links to
pub const STYLESHEET_FILE: &str = "styles.css";

const STYLESHEET: &str = r#"/* Generated Styles - Tailwind-like Responsive Framework */
  
/* Base styles */
* {
  box-sizing: border-box;
}

body {
  margin: 0;
  padding: 0;
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  line-height: 1.6;
  color: #333;
}

.app-container {
  width: 100%;
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 1rem;
}

/* Section styles */
.section {
  width: 100%;
  margin: 1rem 0;
  padding: 1.5rem;
  border-radius: 0.5rem;
  background-color: #ffffff;
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.12), 0 1px 2px rgba(0, 0, 0, 0.24);
}

/* Heading styles */
.heading {
  font-size: 1.5rem;
  font-weight: 600;
  margin: 0.5rem 0;
  color: #1f2937;
}

/* Text styles */
.text {
  font-size: 1rem;
  margin: 0.5rem 0;
  color: #4b5563;
}

/* Image styles */
.image-container {
  text-align: center;
  margin: 1rem 0;
}

.image {
  max-width: 100%;
  height: auto;
  border-radius: 0.25rem;
}

/* Button styles */
.button {
  display: inline-block;
  padding: 0.75rem 1.5rem;
  font-size: 1rem;
  font-weight: 500;
  text-align: center;
  text-decoration: none;
  border: none;
  border-radius: 0.375rem;
  cursor: pointer;
  transition: all 0.2s ease-in-out;
  margin: 0.25rem;
}

/* Responsive styles */
@media (max-width: 640px) {
  /* Mobile styles */
  .app-container {
    padding: 0 0.5rem;
  }
  
  .section {
    padding: 1rem;
    margin: 0.5rem 0;
  }
  
  .heading {
    font-size: 1.25rem;
  }
  
  /* Scale from a 393px mobile design width to the viewport */
  body {
    font-size: calc(16px * (100vw / 393));
  }
}

@media (min-width: 640px) and (max-width: 768px) {
  /* Tablet styles */
  .section {
    padding: 1.25rem;
  }
}

@media (min-width: 1024px) {
  /* Desktop styles */
  .app-container {
    padding: 0 1.5rem;
  }
  
  .heading {
    font-size: 1.75rem;
  }
}

/* Utility classes */
.container {
  width: 100%;
  max-width: 1200px;
  margin-left: auto;
  margin-right: auto;
  padding-left: 1rem;
  padding-right: 1rem;
}

.m-1 { margin: 0.25rem; }
.m-2 { margin: 0.5rem; }
.m-3 { margin: 0.75rem; }
.m-4 { margin: 1rem; }
.m-5 { margin: 1.25rem; }
.m-6 { margin: 1.5rem; }

.p-1 { padding: 0.25rem; }
.p-2 { padding: 0.5rem; }
.p-3 { padding: 0.75rem; }
.p-4 { padding: 1rem; }
.p-5 { padding: 1.25rem; }
.p-6 { padding: 1.5rem; }

.text-center { text-align: center; }
.text-left { text-align: left; }
.text-right { text-align: right; }

.flex { display: flex; }
.inline-flex { display: inline-flex; }
.items-center { align-items: center; }
.justify-center { justify-content: center; }
.justify-between { justify-content: space-between; }

.w-full { width: 100%; }
.h-full { height: 100%; }

.hidden { display: none; }

/* Focus styles for accessibility */
.button:focus,
input:focus,
textarea:focus,
select:focus {
  outline: 2px solid #3b82f6;
  outline-offset: 2px;
}

/* Reduce motion for users who prefer it */
@media (prefers-reduced-motion: reduce) {
  *,
  *::before,
  *::after {
    animation-duration: 0.01ms !important;
    animation-iteration-count: 1 !important;
    transition-duration: 0.01ms !important;
  }
}
"#;

/// Generate the site stylesheet
pub fn generate_css() -> String {
    STYLESHEET.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_every_node_class() {
        let css = generate_css();

        for class in [".section", ".heading", ".text", ".image-container", ".image", ".button"] {
            assert!(css.contains(&format!("{} {{", class)), "missing rule for {}", class);
        }
        assert!(css.contains(".app-container {"));
    }

    #[test]
    fn test_breakpoints() {
        let css = generate_css();

        assert!(css.contains("@media (max-width: 640px)"));
        assert!(css.contains("@media (min-width: 640px) and (max-width: 768px)"));
        assert!(css.contains("@media (min-width: 1024px)"));
        assert!(css.contains("@media (prefers-reduced-motion: reduce)"));
    }

    #[test]
    fn test_output_is_stable() {
        assert_eq!(generate_css(), generate_css());
        assert!(generate_css().ends_with("}\n"));
    }
}
