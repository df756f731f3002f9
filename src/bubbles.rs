use crate::constants::{ATTR_BUBBLE_COUNT, ATTR_BUBBLE_PRESET, BUBBLE_BASE_STYLE};
use crate::style;
use aquatics_core::{FieldParams, FieldPreset, Page, ParticleField};
use wasm_bindgen::JsCast;
use web_sys as web;

/// One absolutely positioned node per bubble, in field order.
pub struct BubbleLayer {
    nodes: Vec<web::HtmlElement>,
}

impl BubbleLayer {
    pub fn mount(
        document: &web::Document,
        layer: &web::Element,
        field: &ParticleField,
    ) -> anyhow::Result<Self> {
        let layered = field.params().depth_layering;
        let mut nodes = Vec::with_capacity(field.len());
        for p in field.particles() {
            let node = document
                .create_element("div")
                .map_err(|e| anyhow::anyhow!("create bubble node: {:?}", e))?
                .dyn_into::<web::HtmlElement>()
                .map_err(|e| anyhow::anyhow!("bubble node is not an HtmlElement: {:?}", e))?;
            let _ = node.set_attribute("aria-hidden", "true");
            let _ = node.set_attribute("style", &style::bubble_style(BUBBLE_BASE_STYLE, p, layered));
            layer
                .append_child(&node)
                .map_err(|e| anyhow::anyhow!("append bubble node: {:?}", e))?;
            nodes.push(node);
        }
        Ok(Self { nodes })
    }

    /// Push the field's current transforms to the DOM.
    pub fn render(&self, field: &ParticleField) {
        for (node, p) in self.nodes.iter().zip(field.particles()) {
            let _ = node
                .style()
                .set_property("transform", &style::bubble_transform(p));
        }
    }
}

/// Field parameters for the layer on `page`, honouring its `data-*` overrides.
pub fn params_for_layer(layer: &web::Element, page: Page, page_preset: FieldPreset) -> FieldParams {
    let preset_attr = layer.get_attribute(ATTR_BUBBLE_PRESET);
    let count_attr = layer.get_attribute(ATTR_BUBBLE_COUNT);
    let params =
        match FieldParams::from_attrs(page_preset, preset_attr.as_deref(), count_attr.as_deref()) {
            Ok(params) => params,
            Err(e) => {
                log::warn!("[bubbles] ignoring layer overrides: {}", e);
                FieldParams::from_preset(page_preset)
            }
        };
    params.with_depth_layering(page.depth_layering())
}
