//! Template registry.
//!
//! Four fixed visual templates, each a table row holding its colors, the
//! names of its two slide masters, a master builder and layout offsets.
//! Lookup is by name through a compile-time perfect hash; an unknown name
//! degrades to the default master pair and offsets, never to an error.

use phf::phf_map;

use crate::common::unit::{Extent, pct};
use crate::deck::layout::Placement;
use crate::ooxml::pptx::{
    MutablePresentation, SLIDE_NUMBER_TOKEN, ShapeContainer, SlideMaster, TextAlign, ThemeColors,
    VerticalAnchor,
};

/// Template colors as hex RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateColors {
    pub bg: &'static str,
    pub text: &'static str,
    pub primary: &'static str,
    pub muted: &'static str,
}

impl TemplateColors {
    pub fn theme(&self) -> ThemeColors {
        ThemeColors {
            background: self.bg.to_string(),
            text: self.text.to_string(),
            primary: self.primary.to_string(),
            muted: self.muted.to_string(),
        }
    }
}

/// Names of the title and body slide masters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MasterNames {
    pub title: &'static str,
    pub body: &'static str,
}

/// Left edges (inches) of body content and of the picture box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOffsets {
    pub content_x: f64,
    pub image_x: f64,
}

pub const DEFAULT_MASTER_NAMES: MasterNames = MasterNames {
    title: "TITLE_SLIDE",
    body: "BODY_SLIDE",
};

pub const DEFAULT_LAYOUT_OFFSETS: LayoutOffsets = LayoutOffsets {
    content_x: 0.5,
    image_x: 5.0,
};

/// Registers a template's title and body masters on a presentation.
pub type MasterBuilder = fn(&Template, &mut MutablePresentation);

/// A visual template.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    name: &'static str,
    ai_hint: &'static str,
    colors: TemplateColors,
    masters: MasterNames,
    offsets: LayoutOffsets,
    builder: MasterBuilder,
}

impl Template {
    /// An ad-hoc template outside the registry.
    ///
    /// Masters are styled like the Professional template in the given colors.
    /// Master names and offsets are resolved by name, so a custom template
    /// named after a registered one (say `"Creative"`) takes that template's
    /// master names and offsets; any other name gets the defaults.
    pub fn custom(name: &'static str, colors: TemplateColors) -> Self {
        Self {
            name,
            ai_hint: "",
            colors,
            masters: DEFAULT_MASTER_NAMES,
            offsets: DEFAULT_LAYOUT_OFFSETS,
            builder: build_banner_masters,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Short description used to pick a preview image.
    pub fn ai_hint(&self) -> &'static str {
        self.ai_hint
    }

    pub fn colors(&self) -> &TemplateColors {
        &self.colors
    }

    pub fn masters(&self) -> MasterNames {
        self.masters
    }

    pub fn offsets(&self) -> LayoutOffsets {
        self.offsets
    }

    /// Register this template's two masters on `pres`.
    ///
    /// Masters replace any earlier master of the same name, so calling this
    /// twice leaves the presentation unchanged.
    pub fn build_masters(&self, pres: &mut MutablePresentation) {
        (self.builder)(self, pres);
    }
}

static TEMPLATES: [Template; 4] = [
    Template {
        name: "Professional",
        ai_hint: "minimalist abstract",
        colors: TemplateColors {
            bg: "F4F3F4",
            text: "383838",
            primary: "79579F",
            muted: "6c757d",
        },
        masters: DEFAULT_MASTER_NAMES,
        offsets: DEFAULT_LAYOUT_OFFSETS,
        builder: build_banner_masters,
    },
    Template {
        name: "Creative",
        ai_hint: "colorful geometric",
        colors: TemplateColors {
            bg: "1A1A1A",
            text: "FFFFFF",
            primary: "9F5779",
            muted: "CCCCCC",
        },
        masters: MasterNames {
            title: "TITLE_SLIDE_CREATIVE",
            body: "BODY_SLIDE_CREATIVE",
        },
        offsets: DEFAULT_LAYOUT_OFFSETS,
        builder: build_creative_masters,
    },
    Template {
        name: "Minimalist",
        ai_hint: "monochrome abstract line",
        colors: TemplateColors {
            bg: "FFFFFF",
            text: "212529",
            primary: "007BFF",
            muted: "6C757D",
        },
        masters: MasterNames {
            title: "TITLE_SLIDE_MINIMALIST",
            body: "BODY_SLIDE_MINIMALIST",
        },
        offsets: DEFAULT_LAYOUT_OFFSETS,
        builder: build_minimalist_masters,
    },
    Template {
        name: "Corporate",
        ai_hint: "blue corporate business",
        colors: TemplateColors {
            bg: "FFFFFF",
            text: "003366",
            primary: "005A9E",
            muted: "5A5A5A",
        },
        masters: MasterNames {
            title: "TITLE_SLIDE_CORPORATE",
            body: "BODY_SLIDE_CORPORATE",
        },
        offsets: LayoutOffsets {
            content_x: 0.6,
            image_x: 5.2,
        },
        builder: build_corporate_masters,
    },
];

static TEMPLATE_INDEX: phf::Map<&'static str, usize> = phf_map! {
    "Professional" => 0,
    "Creative" => 1,
    "Minimalist" => 2,
    "Corporate" => 3,
};

/// All registered templates in display order. The first is the default.
pub fn list_templates() -> &'static [Template] {
    &TEMPLATES
}

pub fn default_template() -> &'static Template {
    &TEMPLATES[0]
}

/// Look up a registered template by its exact name.
pub fn find_template(name: &str) -> Option<&'static Template> {
    TEMPLATE_INDEX.get(name).map(|&index| &TEMPLATES[index])
}

/// Master names for `template`, keyed by its name.
///
/// ```
/// use slideforge::deck::template::{DEFAULT_MASTER_NAMES, Template, find_template, resolve_master_names};
///
/// let creative = find_template("Creative").unwrap();
/// assert_eq!(resolve_master_names(creative).title, "TITLE_SLIDE_CREATIVE");
///
/// let custom = Template::custom("Neon", *creative.colors());
/// assert_eq!(resolve_master_names(&custom), DEFAULT_MASTER_NAMES);
/// ```
pub fn resolve_master_names(template: &Template) -> MasterNames {
    find_template(template.name())
        .map(Template::masters)
        .unwrap_or(DEFAULT_MASTER_NAMES)
}

/// Layout offsets for `template`, keyed by its name.
pub fn resolve_layout_offsets(template: &Template) -> LayoutOffsets {
    find_template(template.name())
        .map(Template::offsets)
        .unwrap_or(DEFAULT_LAYOUT_OFFSETS)
}

/// Height of single-line master text such as branding and slide numbers.
const FOOTER_TEXT_HEIGHT: f64 = 0.3;

fn full_width_bar(y: f64, h: f64) -> Placement {
    Placement::new(Extent::Inches(0.0), Extent::Inches(y), pct(100.0), Extent::Inches(h))
}

fn rule(x: f64, y: f64, w: Extent) -> Placement {
    Placement::new(Extent::Inches(x), Extent::Inches(y), w, Extent::Inches(0.0))
}

fn footer_text(x: f64, y: f64, w: Extent) -> Placement {
    Placement::new(Extent::Inches(x), Extent::Inches(y), w, Extent::Inches(FOOTER_TEXT_HEIGHT))
}

/// Body master with a colored top banner carrying the product name.
fn banner_body_master(template: &Template, pres: &MutablePresentation, name: &str) -> SlideMaster {
    let colors = template.colors();
    let mut master = SlideMaster::new(name);
    master.set_background(colors.bg);
    master.add_rectangle(full_width_bar(0.0, 0.75).frame_in(pres), Some(colors.primary));
    master
        .add_text_box(
            "SlideForge Presentation",
            Placement::new(Extent::Inches(0.5), Extent::Inches(0.0), pct(90.0), Extent::Inches(0.75)).frame_in(pres),
        )
        .font_size(16.0)
        .bold(true)
        .color("FFFFFF")
        .align(TextAlign::Left)
        .valign(VerticalAnchor::Middle);
    master
}

fn build_banner_masters(template: &Template, pres: &mut MutablePresentation) {
    let colors = template.colors();
    let names = resolve_master_names(template);

    let mut title = SlideMaster::new(names.title);
    title.set_background(colors.bg);
    title.add_rectangle(full_width_bar(5.1, 0.5).frame_in(pres), Some(colors.primary));
    title
        .add_text_box("SlideForge", footer_text(0.5, 5.2, pct(90.0)).frame_in(pres))
        .font_size(12.0)
        .color("FFFFFF")
        .align(TextAlign::Right);

    let body = banner_body_master(template, pres, names.body);
    pres.define_master(title);
    pres.define_master(body);
}

fn build_creative_masters(template: &Template, pres: &mut MutablePresentation) {
    let colors = template.colors();
    let names = resolve_master_names(template);

    let mut title = SlideMaster::new(names.title);
    title.set_background(colors.bg);
    title.add_line(rule(0.0, 2.75, pct(100.0)).frame_in(pres), colors.primary, 3.0);
    title
        .add_text_box("SlideForge", footer_text(0.5, 5.2, pct(90.0)).frame_in(pres))
        .font_size(12.0)
        .color(colors.primary)
        .align(TextAlign::Right);

    let body = banner_body_master(template, pres, names.body);
    pres.define_master(title);
    pres.define_master(body);
}

fn build_minimalist_masters(template: &Template, pres: &mut MutablePresentation) {
    let colors = template.colors();
    let names = resolve_master_names(template);

    let mut title = SlideMaster::new(names.title);
    title.set_background(colors.bg);
    title.add_line(rule(0.5, 5.2, Extent::Inches(9.0)).frame_in(pres), colors.primary, 1.0);
    title
        .add_text_box(SLIDE_NUMBER_TOKEN, footer_text(0.5, 5.25, Extent::Inches(0.5)).frame_in(pres))
        .font_size(10.0)
        .color(colors.muted)
        .align(TextAlign::Left)
        .slide_number_field(true);

    let mut body = SlideMaster::new(names.body);
    body.set_background(colors.bg);
    body.add_text_box(SLIDE_NUMBER_TOKEN, footer_text(9.0, 5.25, Extent::Inches(0.5)).frame_in(pres))
        .font_size(10.0)
        .color(colors.muted)
        .align(TextAlign::Right)
        .slide_number_field(true);

    pres.define_master(title);
    pres.define_master(body);
}

fn build_corporate_masters(template: &Template, pres: &mut MutablePresentation) {
    let colors = template.colors();
    let names = resolve_master_names(template);

    let mut title = SlideMaster::new(names.title);
    title.set_background(colors.bg);
    title.add_rectangle(full_width_bar(0.0, 0.3).frame_in(pres), Some(colors.primary));
    title.add_rectangle(full_width_bar(5.32, 0.3).frame_in(pres), Some(colors.primary));

    let mut body = SlideMaster::new(names.body);
    body.set_background(colors.bg);
    body.add_rectangle(
        Placement::new(Extent::Inches(0.0), Extent::Inches(0.0), Extent::Inches(0.4), pct(100.0)).frame_in(pres),
        Some(colors.primary),
    );
    body.add_line(rule(0.6, 1.5, Extent::Inches(8.9)).frame_in(pres), colors.primary, 1.0);
    body.add_text_box(
        &format!("Slide {}", SLIDE_NUMBER_TOKEN),
        footer_text(0.6, 5.2, pct(90.0)).frame_in(pres),
    )
    .font_size(10.0)
    .color(colors.muted)
    .align(TextAlign::Right)
    .slide_number_field(true);

    pres.define_master(title);
    pres.define_master(body);
}
