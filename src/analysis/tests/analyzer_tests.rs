use crate::analysis::{DesignAnalyzer, analyze_designs};
use crate::config::AnalysisDefaults;
use crate::results::{
    LayoutPattern, RawPageSample, SectionElement, SectionKind, Typography,
};

fn strings(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn dark_page(url: &str) -> RawPageSample {
    let header = SectionElement {
        tag: "header".to_string(),
        has_heading: true,
        background_color: "rgb(10, 10, 10)".to_string(),
        order: 0,
        ..SectionElement::default()
    };
    let main = SectionElement {
        tag: "section".to_string(),
        classes: "features grid".to_string(),
        background_color: "rgb(17, 17, 17)".to_string(),
        order: 1,
        ..SectionElement::default()
    };
    let footer = SectionElement {
        tag: "footer".to_string(),
        background_color: "rgb(26, 26, 26)".to_string(),
        order: 2,
        ..SectionElement::default()
    };

    RawPageSample {
        url: url.to_string(),
        html: r#"<body class="bg-black"><a class="hover:underline">x</a></body>"#.to_string(),
        styles: strings(&[".fade-in { opacity: 1 }"]),
        fonts: strings(&["Geist", "Geist", "Geist Mono"]),
        colors: strings(&["#0a0a0a", "#111111", "#1a1a1a", "#ffffff", "#f5f5f5"]),
        sections: vec![header, main, footer],
        ..RawPageSample::default()
    }
}

#[test]
fn test_empty_input_gives_default_analysis() {
    let analysis = analyze_designs(&[]);
    let defaults = AnalysisDefaults::default();

    assert_eq!(analysis.colors, defaults.palette);
    assert_eq!(analysis.typography, Typography::default());
    assert_eq!(analysis.layout, LayoutPattern::default());
    assert_eq!(
        analysis.sections,
        vec![
            SectionKind::Hero,
            SectionKind::Features,
            SectionKind::Cta,
            SectionKind::Footer
        ]
    );
    assert!(analysis.animations.is_empty());
    assert!(analysis.source_urls.is_empty());
}

#[test]
fn test_dark_landing_page() {
    let analysis = analyze_designs(&[dark_page("https://dark.example")]);

    assert!(analysis.layout.is_dark_mode);
    assert!(analysis.layout.has_hero);
    assert!(analysis.layout.has_footer);
    assert!(analysis.layout.has_features_grid);
    assert!(["#0a0a0a", "#111111", "#1a1a1a"].contains(&analysis.colors.background.as_str()));
    assert!(["#ffffff", "#f5f5f5"].contains(&analysis.colors.text.as_str()));

    assert_eq!(analysis.typography.heading_font, "Geist");
    assert_eq!(analysis.typography.body_font, "Geist Mono");

    assert_eq!(analysis.sections.first(), Some(&SectionKind::Hero));
    assert_eq!(analysis.sections.last(), Some(&SectionKind::Footer));
    assert!(analysis.sections.contains(&SectionKind::Features));

    assert!(analysis.animations.contains(&"fade-in".to_string()));
    assert!(analysis.animations.contains(&"hover:underline".to_string()));
    assert_eq!(analysis.source_urls, vec!["https://dark.example"]);
}

#[test]
fn test_pages_are_pooled_in_order() {
    let light = RawPageSample {
        url: "https://light.example".to_string(),
        colors: strings(&["rgb(255, 255, 255)", "rgb(250, 250, 250)", "rgb(240, 240, 240)"]),
        fonts: strings(&["Inter"]),
        sections: vec![SectionElement::new("section", "pricing")],
        ..RawPageSample::default()
    };
    let pages = [dark_page("https://dark.example"), light];
    let analysis = analyze_designs(&pages);

    assert_eq!(
        analysis.source_urls,
        vec!["https://dark.example", "https://light.example"]
    );
    // 3 dark vs 4 distinct light colors, #ffffff seen twice
    assert_eq!(analysis.colors.background, "#ffffff");
    assert!(analysis.sections.contains(&SectionKind::Pricing));
    assert!(analysis.layout.has_pricing);
}

#[test]
fn test_page_without_signals_still_reports_url() {
    let page = RawPageSample {
        url: "https://blank.example".to_string(),
        ..RawPageSample::default()
    };
    let analysis = analyze_designs(&[page]);

    assert_eq!(analysis.colors, AnalysisDefaults::default().palette);
    assert_eq!(analysis.typography, Typography::default());
    assert_eq!(analysis.sections, vec![SectionKind::Hero, SectionKind::Footer]);
    assert!(!analysis.layout.has_hero);
    assert_eq!(analysis.source_urls, vec!["https://blank.example"]);
}

#[test]
fn test_custom_defaults_flow_through() {
    let defaults = AnalysisDefaults {
        font: "Manrope".to_string(),
        max_animations: 1,
        ..AnalysisDefaults::default()
    };
    let analyzer = DesignAnalyzer::new(defaults);
    let mut page = dark_page("https://dark.example");
    page.fonts.clear();

    let analysis = analyzer.analyze(&[page]);
    assert_eq!(analysis.typography.heading_font, "Manrope");
    assert_eq!(analysis.animations.len(), 1);
}

#[test]
fn test_analysis_serializes_section_labels() {
    let analysis = analyze_designs(&[]);
    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(
        json["sections"],
        serde_json::json!(["hero", "features", "cta", "footer"])
    );
    assert_eq!(json["layout"]["has_features_grid"], true);
    assert_eq!(json["typography"]["heading_sizes"][0], "4rem");
}

#[test]
fn test_section_kind_display_matches_serialized_label() {
    for kind in SectionKind::ALL {
        let serialized = serde_json::to_string(&kind).unwrap();
        assert_eq!(serialized, format!("\"{}\"", kind));
    }
}
