//! Static HTML rendering of a generated theme.
//!
//! A deterministic template substitution: the palette becomes CSS
//! custom properties, typography becomes font-family declarations, and
//! the home page's copy fills a fixed skeleton (nav, hero, feature
//! grid, contact form, footer). The transform is total: empty section
//! lists render zero cards, missing icons get a default glyph, and all
//! interpolated text is escaped.
//!
//! The produced document is self-contained apart from two resources
//! fetched at view time: the Tailwind CDN script and a Google Fonts
//! stylesheet for the two families.

use thematic_core::{Typography, WebSection, WebsiteTheme};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";
const DEFAULT_ICON: &str = "✨";

/// Escape text for interpolation into HTML content and attributes.
fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn fonts_href(typography: &Typography) -> String {
    let heading = typography.heading_or_default().replace(' ', "+");
    let body = typography.body_or_default().replace(' ', "+");
    format!(
        "https://fonts.googleapis.com/css2?family={heading}:wght@400;700&family={body}:wght@400;600&display=swap"
    )
}

fn palette_css(theme: &WebsiteTheme) -> String {
    let mut css = String::from(":root {\n");
    for (slot, value) in theme.colors.slots() {
        css.push_str(&format!("  --{slot}: {};\n", escape(value)));
    }
    css.push_str("}\n");
    css
}

fn head(theme: &WebsiteTheme) -> String {
    format!(
        "<head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         <script src=\"{TAILWIND_CDN}\"></script>\n\
         <link rel=\"stylesheet\" href=\"{fonts}\">\n\
         <style>\n\
         {palette}\
         body {{ background-color: var(--background); color: var(--text); font-family: '{body_font}', sans-serif; }}\n\
         h1, h2, h3 {{ font-family: '{heading_font}', sans-serif; }}\n\
         </style>\n\
         </head>",
        title = escape(&theme.business_name),
        fonts = escape(&fonts_href(&theme.typography)),
        palette = palette_css(theme),
        body_font = escape(theme.typography.body_or_default()),
        heading_font = escape(theme.typography.heading_or_default()),
    )
}

fn nav(theme: &WebsiteTheme) -> String {
    let links: String = theme
        .pages
        .iter()
        .map(|(key, page)| {
            format!(
                "<a href=\"#{anchor}\" class=\"text-sm font-medium opacity-60 hover:opacity-100\">{label}</a>\n",
                anchor = key.as_str(),
                label = escape(&page.title),
            )
        })
        .collect();
    format!(
        "<header class=\"flex items-center justify-between px-10 py-5\" style=\"border-bottom: 1px solid var(--accent)\">\n\
         <div class=\"text-2xl font-bold\" style=\"color: var(--primary)\">{brand}</div>\n\
         <nav class=\"hidden md:flex space-x-8\">\n{links}</nav>\n\
         <button class=\"px-5 py-2 rounded-full text-sm font-bold\" style=\"background-color: var(--primary); color: var(--background)\">Get Started</button>\n\
         </header>",
        brand = escape(&theme.business_name),
    )
}

fn hero(theme: &WebsiteTheme) -> String {
    let home = &theme.pages.home;
    format!(
        "<section id=\"home\" class=\"flex flex-col justify-center px-10 py-32\">\n\
         <h1 class=\"text-6xl font-bold mb-6 max-w-2xl\" style=\"color: var(--primary)\">{title}</h1>\n\
         <p class=\"text-xl mb-10 max-w-xl opacity-80\">{subtitle}</p>\n\
         <div class=\"flex gap-4\">\n\
         <button class=\"px-8 py-4 rounded-xl font-bold\" style=\"background-color: var(--accent); color: var(--background)\">Explore Solution</button>\n\
         <button class=\"px-8 py-4 rounded-xl font-bold border-2\" style=\"border-color: var(--primary); color: var(--primary)\">Contact Us</button>\n\
         </div>\n\
         </section>",
        title = escape(&home.hero_title),
        subtitle = escape(&home.hero_subtitle),
    )
}

fn feature_card(section: &WebSection) -> String {
    format!(
        "<div class=\"p-10 rounded-3xl\" style=\"background-color: var(--card)\">\n\
         <div class=\"text-3xl mb-6\">{icon}</div>\n\
         <h3 class=\"text-2xl font-bold mb-4\" style=\"color: var(--primary)\">{heading}</h3>\n\
         <p class=\"opacity-70 leading-relaxed\">{content}</p>\n\
         </div>\n",
        icon = escape(section.icon.as_deref().unwrap_or(DEFAULT_ICON)),
        heading = escape(&section.heading),
        content = escape(&section.content),
    )
}

fn feature_grid(theme: &WebsiteTheme) -> String {
    let cards: String = theme.pages.home.sections.iter().map(feature_card).collect();
    format!(
        "<section id=\"services\" class=\"px-10 py-24\">\n\
         <div class=\"grid grid-cols-1 md:grid-cols-3 gap-8\">\n{cards}</div>\n\
         </section>",
    )
}

fn contact_form(theme: &WebsiteTheme) -> String {
    format!(
        "<section id=\"contact\" class=\"px-10 py-24\">\n\
         <h2 class=\"text-4xl font-bold mb-8\">{title}</h2>\n\
         <form class=\"max-w-xl space-y-4\">\n\
         <input type=\"text\" placeholder=\"Name\" class=\"w-full rounded-xl px-5 py-4\" style=\"background-color: var(--card)\">\n\
         <input type=\"email\" placeholder=\"Email\" class=\"w-full rounded-xl px-5 py-4\" style=\"background-color: var(--card)\">\n\
         <textarea placeholder=\"Message\" rows=\"5\" class=\"w-full rounded-xl px-5 py-4\" style=\"background-color: var(--card)\"></textarea>\n\
         <button type=\"submit\" class=\"px-8 py-4 rounded-xl font-bold\" style=\"background-color: var(--primary); color: var(--background)\">Send</button>\n\
         </form>\n\
         </section>",
        title = escape(&theme.pages.contact.title),
    )
}

fn footer(theme: &WebsiteTheme) -> String {
    format!(
        "<footer class=\"px-10 py-12 text-xs uppercase tracking-widest opacity-50\" style=\"border-top: 1px solid var(--accent)\">\n\
         <p>© {brand} • {industry} Solutions</p>\n\
         </footer>",
        brand = escape(&theme.business_name),
        industry = escape(&theme.industry),
    )
}

/// Render a theme as a complete static HTML document.
pub fn to_html(theme: &WebsiteTheme) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         {head}\n\
         <body>\n\
         {nav}\n\
         <main>\n\
         {hero}\n\
         {features}\n\
         {contact}\n\
         </main>\n\
         {footer}\n\
         </body>\n\
         </html>\n",
        head = head(theme),
        nav = nav(theme),
        hero = hero(theme),
        features = feature_grid(theme),
        contact = contact_form(theme),
        footer = footer(theme),
    )
}
