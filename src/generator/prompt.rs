use crate::results::{DesignAnalysis, ProductInfo};

pub const SYSTEM_PROMPT: &str = "You are an expert web developer who builds modern, \
responsive landing pages with Tailwind CSS. You write clean, semantic and accessible HTML.

Produce a complete, standalone HTML landing page that:
1. Uses only Tailwind CSS from its CDN (no custom stylesheets)
2. Is fully responsive, mobile first
3. Follows the supplied design system and color palette
4. Has smooth scrolling and hover effects
5. Uses semantic HTML5 elements
6. Is ready for production

Reply with the HTML document only, starting with <!DOCTYPE html> and ending with \
</html>. No explanations and no Markdown code fences.";

const REQUIREMENTS: &str = "## Requirements

1. Start with <!DOCTYPE html> and include proper meta tags
2. Load Tailwind CSS from the CDN: <script src=\"https://cdn.tailwindcss.com\"></script>
3. Add a Tailwind config script that extends the colors with the palette above
4. Build every section listed in the layout
5. Make the hero section stand out with the tagline and the call to action
6. Show the features in a grid with icons (emoji or simple inline SVG)
7. End with a footer carrying a copyright line
8. Add subtle hover effects to interactive elements
9. Make the page fully responsive
10. Use the palette colors exactly as given

Generate the complete HTML now:";

/// Builds the user prompt describing the design system and the product
pub fn build_generation_prompt(design: &DesignAnalysis, product: &ProductInfo) -> String {
    let sections = design
        .sections
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let features = if product.features.is_empty() {
        "No specific features provided".to_string()
    } else {
        product
            .features
            .iter()
            .map(|f| match &f.icon {
                Some(icon) => format!("- {} {}: {}", icon, f.title, f.description),
                None => format!("- {}: {}", f.title, f.description),
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    let logo = match &product.logo_url {
        Some(url) => format!("### Logo\nLogo URL: {}\n\n", url),
        None => String::new(),
    };

    let colors = &design.colors;
    let typography = &design.typography;

    format!(
        "Generate a landing page with the following specification:

## Design System

### Colors
- Primary: {primary}
- Secondary: {secondary}
- Accent: {accent}
- Background: {background}
- Text: {text}

### Typography
- Heading Font: {heading_font}
- Body Font: {body_font}
- Heading Sizes: {heading_sizes}
- Body Size: {body_size}
- Link Google Fonts in the head when the fonts are not system fonts

### Layout
- Dark Mode: {dark_mode}
- Sections to include, in order: {sections}

## Product Information

### Basic Info
- Name: {name}
- Tagline: {tagline}
- Description: {description}

### Features
{features}

### Call to Action
- Button Text: {cta_text}
- Button Link: {cta_url}

{logo}{requirements}",
        primary = colors.primary,
        secondary = colors.secondary,
        accent = colors.accent,
        background = colors.background,
        text = colors.text,
        heading_font = typography.heading_font,
        body_font = typography.body_font,
        heading_sizes = typography.heading_sizes.join(", "),
        body_size = typography.body_size,
        dark_mode = if design.layout.is_dark_mode { "Yes" } else { "No" },
        sections = sections,
        name = product.name,
        tagline = product.tagline,
        description = product.description,
        features = features,
        cta_text = product.cta_text,
        cta_url = product.cta_url,
        logo = logo,
        requirements = REQUIREMENTS,
    )
}
