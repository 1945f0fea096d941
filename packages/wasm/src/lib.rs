use wasm_bindgen::prelude::*;
use webbuilder_compiler_css::generate_css;
use webbuilder_compiler_html::{compile_to_html, generate_style_string, CompileOptions};
use webbuilder_editor::{template, Editor};
use webbuilder_schema::{forest_from_json, NodeType, Props};

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn render(schema_json: &str) -> Result<String, String> {
    let nodes = forest_from_json(schema_json).map_err(|e| format!("Schema error: {}", e))?;
    Ok(compile_to_html(&nodes, CompileOptions::default()))
}

fn style(props_json: &str) -> Result<String, String> {
    let props: Props =
        serde_json::from_str(props_json).map_err(|e| format!("Props error: {}", e))?;
    Ok(generate_style_string(&props))
}

/// Render a schema (JSON array of nodes) to a complete HTML document
#[wasm_bindgen(js_name = renderHtml)]
pub fn render_html_js(schema_json: &str) -> Result<String, JsValue> {
    render(schema_json).map_err(|e| JsValue::from_str(&e))
}

/// The fixed site stylesheet
#[wasm_bindgen(js_name = generateCss)]
pub fn generate_css_js() -> String {
    generate_css()
}

/// Inline style attribute value for a props object
#[wasm_bindgen(js_name = styleString)]
pub fn style_string_js(props_json: &str) -> Result<String, JsValue> {
    style(props_json).map_err(|e| JsValue::from_str(&e))
}

/// Editor handle for the builder UI
#[wasm_bindgen]
pub struct WebBuilder {
    editor: Editor,
}

impl Default for WebBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WebBuilder {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            editor: Editor::new(),
        }
    }

    #[wasm_bindgen(js_name = dragStart)]
    pub fn drag_start(&mut self, node_type: &str) -> Result<(), JsValue> {
        let template = template(&NodeType::from(node_type))
            .ok_or_else(|| JsValue::from_str(&format!("Unknown element template: {}", node_type)))?;
        self.editor.drag_start(&template);
        Ok(())
    }

    /// Commit the dragged element; returns the new node id
    #[wasm_bindgen(js_name = drop)]
    pub fn drop_staged(&mut self, target_id: Option<String>) -> Result<Option<String>, JsValue> {
        self.editor
            .drop(target_id.as_deref())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn select(&mut self, node_id: Option<String>) {
        self.editor.select_node(node_id.as_deref());
    }

    #[wasm_bindgen(getter, js_name = selectedId)]
    pub fn selected_id(&self) -> Option<String> {
        self.editor.selected_id().map(str::to_string)
    }

    /// Selected node as JSON, `undefined` without a selection
    #[wasm_bindgen(js_name = selectedNode)]
    pub fn selected_node(&self) -> Option<String> {
        let node = self.editor.selected_node()?;
        serde_json::to_string(&node).ok()
    }

    #[wasm_bindgen(js_name = patchProp)]
    pub fn patch_prop(&mut self, key: &str, value: &str) {
        self.editor.patch_prop(key, value);
    }

    #[wasm_bindgen(js_name = deleteSelected)]
    pub fn delete_selected(&mut self) -> usize {
        self.editor.delete_selected()
    }

    /// Apply an event in its JSON form
    pub fn dispatch(&mut self, event_json: &str) -> Result<Option<String>, JsValue> {
        self.editor
            .dispatch_json(event_json)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = exportJson)]
    pub fn export_json(&self) -> Result<String, JsValue> {
        self.editor
            .export_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = exportHtmlPreview)]
    pub fn export_html_preview(&self) -> String {
        self.editor.export_html_preview()
    }

    #[wasm_bindgen(js_name = loadJson)]
    pub fn load_json(&mut self, source: &str) -> Result<(), JsValue> {
        self.editor
            .load_json(source)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_schema_json() {
        let html = render(r#"[{"id":"h","type":"heading","props":{"text":"Hi"}}]"#).unwrap();
        assert!(html.contains("<h2 class=\"heading\" style=\"text:Hi;\">Hi</h2>"));
    }

    #[test]
    fn test_render_rejects_malformed_json() {
        let err = render("[{").unwrap_err();
        assert!(err.starts_with("Schema error:"));
    }

    #[test]
    fn test_style_string() {
        assert_eq!(
            style(r#"{"fontSize":"16px","padding":0}"#).unwrap(),
            "font-size:16px;padding:0;"
        );
    }

    #[test]
    fn test_builder_session() {
        let mut builder = WebBuilder::new();
        builder.drag_start("text").unwrap();
        let id = builder.drop_staged(None).unwrap().unwrap();

        builder.select(Some(id.clone()));
        builder.patch_prop("text", "Hello");

        assert_eq!(builder.selected_id(), Some(id));
        assert!(builder.selected_node().unwrap().contains("Hello"));
        assert!(builder.export_json().unwrap().contains("Hello"));
        assert_eq!(builder.delete_selected(), 1);
    }
}
