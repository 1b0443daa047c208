//! Module for the lint rules.

mod a_element;
mod abbr_element;
mod accesskey_element;
mod address_element;
mod area_element;
mod aria_element;
mod autocomplete_element;
mod autofocus_element;
mod blockquote_element;
mod button_element;
mod canvas_element;
mod checked_element;
mod click_handler;
mod description_element;
mod details_element;
mod dialog_element;
mod disabled_element;
mod distracting_element;
mod dl_element;
mod duplicate_id;
mod embed_element;
mod expanded_element;
mod figure_element;
mod focus_element;
mod footer_element;
mod form_element;
mod header_element;
mod heading_element;
mod hr_element;
mod iframe_element;
mod img_element;
mod input_element;
mod ins_del_element;
mod label_element;
mod landmark_element;
mod lang_element;
mod list_element;
mod live_region;
mod map_element;
mod media_element;
mod menu_element;
mod meta_element;
mod meter_element;
mod noscript_element;
mod object_element;
mod optgroup_element;
mod orientation_element;
mod output_element;
mod pressed_element;
mod progress_element;
mod required_element;
mod role_props_element;
mod ruby_element;
mod scope_element;
mod section_element;
mod select_element;
mod selected_element;
mod skip_link;
mod slider_element;
mod svg_element;
mod tab_element;
mod table_element;
mod textarea_element;
mod time_element;
mod title_element;
mod track_element;

pub use a_element::*;
pub use abbr_element::*;
pub use accesskey_element::*;
pub use address_element::*;
pub use area_element::*;
pub use aria_element::*;
pub use autocomplete_element::*;
pub use autofocus_element::*;
pub use blockquote_element::*;
pub use button_element::*;
pub use canvas_element::*;
pub use checked_element::*;
pub use click_handler::*;
pub use description_element::*;
pub use details_element::*;
pub use dialog_element::*;
pub use disabled_element::*;
pub use distracting_element::*;
pub use dl_element::*;
pub use duplicate_id::*;
pub use embed_element::*;
pub use expanded_element::*;
pub use figure_element::*;
pub use focus_element::*;
pub use footer_element::*;
pub use form_element::*;
pub use header_element::*;
pub use heading_element::*;
pub use hr_element::*;
pub use iframe_element::*;
pub use img_element::*;
pub use input_element::*;
pub use ins_del_element::*;
pub use label_element::*;
pub use landmark_element::*;
pub use lang_element::*;
pub use list_element::*;
pub use live_region::*;
pub use map_element::*;
pub use media_element::*;
pub use menu_element::*;
pub use meta_element::*;
pub use meter_element::*;
pub use noscript_element::*;
pub use object_element::*;
pub use optgroup_element::*;
pub use orientation_element::*;
pub use output_element::*;
pub use pressed_element::*;
pub use progress_element::*;
pub use required_element::*;
pub use role_props_element::*;
pub use ruby_element::*;
pub use scope_element::*;
pub use section_element::*;
pub use select_element::*;
pub use selected_element::*;
pub use skip_link::*;
pub use slider_element::*;
pub use svg_element::*;
pub use tab_element::*;
pub use table_element::*;
pub use textarea_element::*;
pub use time_element::*;
pub use title_element::*;
pub use track_element::*;

use crate::Config;
use crate::Rule;

/// Gets the default rule set.
pub fn rules(config: &Config) -> Vec<Box<dyn Rule>> {
    let rules: Vec<Box<dyn Rule>> = vec![
        Box::new(AElementRule::new(config)),
        Box::<AbbrElementRule>::default(),
        Box::<AccesskeyElementRule>::default(),
        Box::<AddressElementRule>::default(),
        Box::<AreaElementRule>::default(),
        Box::<AriaElementRule>::default(),
        Box::<AutocompleteElementRule>::default(),
        Box::<AutofocusElementRule>::default(),
        Box::<BlockquoteElementRule>::default(),
        Box::<ButtonElementRule>::default(),
        Box::<CanvasElementRule>::default(),
        Box::<CheckedElementRule>::default(),
        Box::<ClickHandlerRule>::default(),
        Box::<DescriptionElementRule>::default(),
        Box::<DetailsElementRule>::default(),
        Box::<DialogElementRule>::default(),
        Box::<DisabledElementRule>::default(),
        Box::<DistractingElementRule>::default(),
        Box::<DlElementRule>::default(),
        Box::<DuplicateIdRule>::default(),
        Box::<EmbedElementRule>::default(),
        Box::<ExpandedElementRule>::default(),
        Box::<FigureElementRule>::default(),
        Box::<FocusElementRule>::default(),
        Box::<FooterElementRule>::default(),
        Box::<FormElementRule>::default(),
        Box::<HeaderElementRule>::default(),
        Box::new(HeadingElementRule::new(config)),
        Box::<HrElementRule>::default(),
        Box::<IframeElementRule>::default(),
        Box::new(ImgElementRule::new(config)),
        Box::<InputElementRule>::default(),
        Box::<InsDelElementRule>::default(),
        Box::<LabelElementRule>::default(),
        Box::<LandmarkElementRule>::default(),
        Box::<LangElementRule>::default(),
        Box::<ListElementRule>::default(),
        Box::<LiveRegionRule>::default(),
        Box::<MapElementRule>::default(),
        Box::<MediaElementRule>::default(),
        Box::<MenuElementRule>::default(),
        Box::new(MetaElementRule::new(config)),
        Box::<MeterElementRule>::default(),
        Box::<NoscriptElementRule>::default(),
        Box::<ObjectElementRule>::default(),
        Box::<OptgroupElementRule>::default(),
        Box::<OrientationElementRule>::default(),
        Box::<OutputElementRule>::default(),
        Box::<PressedElementRule>::default(),
        Box::<ProgressElementRule>::default(),
        Box::<RequiredElementRule>::default(),
        Box::<RolePropsElementRule>::default(),
        Box::<RubyElementRule>::default(),
        Box::<ScopeElementRule>::default(),
        Box::<SectionElementRule>::default(),
        Box::<SelectElementRule>::default(),
        Box::<SelectedElementRule>::default(),
        Box::<SkipLinkRule>::default(),
        Box::<SliderElementRule>::default(),
        Box::<SvgElementRule>::default(),
        Box::<TabElementRule>::default(),
        Box::<TableElementRule>::default(),
        Box::<TextareaElementRule>::default(),
        Box::<TimeElementRule>::default(),
        Box::new(TitleElementRule::new(config)),
        Box::<TrackElementRule>::default(),
    ];

    // Ensure all the rule ids are unique and kebab case
    #[cfg(debug_assertions)]
    {
        use convert_case::Case;
        use convert_case::Casing;
        let mut set = std::collections::HashSet::new();
        for r in rules.iter() {
            if r.id().to_case(Case::Kebab) != r.id() {
                panic!("lint rule id `{id}` is not kebab case", id = r.id());
            }

            if !set.insert(r.id()) {
                panic!("duplicate rule id `{id}`", id = r.id());
            }
        }
    }

    rules
}

/// Utilities for testing rule families in isolation.
#[cfg(test)]
pub(crate) mod testing {
    use a11yinspect_ast::Document;

    use crate::Context;
    use crate::DocumentState;
    use crate::Rule;

    /// Runs a rule family over a document and describes its reports.
    ///
    /// Each report is rendered as `<key> at <location>`, in document order.
    /// Variants are not applied, so every key the family reports is listed
    /// once.
    pub fn reports(rule: &dyn Rule, document: &Document) -> Vec<String> {
        let mut state = DocumentState::default();
        let mut reports = Vec::new();
        for element in document.elements() {
            state.observe(&element);
            if rule.applies_to(&element) {
                let mut cx = Context::new(document, &state);
                rule.check(&mut cx, &element);
                reports.extend(cx.into_reports());
            }
        }

        let mut cx = Context::new(document, &state);
        rule.finalize(&mut cx);
        reports.extend(cx.into_reports());

        reports.sort_by_key(|(_, location)| *location);
        reports
            .into_iter()
            .map(|(key, location)| format!("{key} at {}", document.describe(location)))
            .collect()
    }
}
