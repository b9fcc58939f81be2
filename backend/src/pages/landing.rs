use super::escape;

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        title: "Lightning Fast",
        description: "Served straight from a single native binary",
        icon: "⚡",
    },
    Feature {
        title: "Beautiful Animations",
        description: "Smooth transitions with spring easing",
        icon: "✨",
    },
    Feature {
        title: "Dark Theme",
        description: "Easy on the eyes with a modern dark interface",
        icon: "🌙",
    },
    Feature {
        title: "Responsive Design",
        description: "Works perfectly on all devices and screen sizes",
        icon: "📱",
    },
    Feature {
        title: "Database Ready",
        description: "A storage layer is planned for a future release",
        icon: "💾",
    },
    Feature {
        title: "Install Anywhere",
        description: "Add it to your home screen as a progressive web app",
        icon: "🚀",
    },
];

/// (lead text, file path, trailing text)
const GETTING_STARTED: [(&str, &str, &str); 4] = [
    ("Edit ", "backend/src/pages/landing.rs", " to customize the landing page"),
    ("Add menu items in ", "backend/src/pages/layout.rs", ""),
    ("Update the splash icon in ", "backend/src/utils/icon.rs", ""),
    ("Tune the splash timing with ", "SPLASH_PROFILE", " and friends in .env"),
];

pub fn render_landing() -> String {
    let mut html = String::from(r#"<div class="landing"><div class="card-grid">"#);

    html.push_str(
        r#"<section class="hero-card">
            <h1>Welcome to Gait Daily</h1>
            <p>A beautiful application with smooth animations and modern design.</p>
            <button class="cta" type="button">Get Started</button>
        </section>"#,
    );

    for feature in FEATURES.iter() {
        html.push_str(&format!(
            r#"<div class="feature-card"><div class="feature-icon">{}</div><h3>{}</h3><p>{}</p></div>"#,
            escape(feature.icon),
            escape(feature.title),
            escape(feature.description),
        ));
    }
    html.push_str("</div>");

    html.push_str(r#"<section class="getting-started"><h2>Getting Started</h2><ul>"#);
    for (lead, path, tail) in GETTING_STARTED.iter() {
        html.push_str(&format!(
            r#"<li><span class="check">✓</span><span>{}<code>{}</code>{}</span></li>"#,
            escape(lead),
            escape(path),
            escape(tail),
        ));
    }
    html.push_str("</ul></section></div>");

    html
}
