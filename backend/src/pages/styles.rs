use crate::onboarding::TimingProfile;

/// Spring-like easing used for the menu and the splash icon.
pub const SPRING_EASING: &str = "cubic-bezier(0.16, 1, 0.3, 1)";

pub fn stylesheet(timing: &TimingProfile) -> String {
    let menu_delay_ms = timing.menu_entrance_delay.as_millis();
    format!(
        r#"
        *, *::before, *::after {{ box-sizing: border-box; }}
        html, body {{
            margin: 0;
            background: #000;
            color: #fff;
            font-family: system-ui, -apple-system, sans-serif;
            -webkit-font-smoothing: antialiased;
        }}
        @keyframes pulse-scale {{
            0% {{ transform: scale(0.8); opacity: 1; }}
            50% {{ transform: scale(1.3); opacity: 0.8; }}
            100% {{ transform: scale(1); opacity: 1; }}
        }}
        @keyframes fade-out {{
            0% {{ opacity: 1; }}
            100% {{ opacity: 0; }}
        }}
        @keyframes slide-up {{
            0% {{ transform: translateY(100%); opacity: 0; }}
            100% {{ transform: translateY(0); opacity: 1; }}
        }}
        @keyframes ring-out {{
            0% {{ transform: scale(var(--ring-from)); opacity: 0.9; }}
            100% {{ transform: scale(var(--ring-to)); opacity: 0; }}
        }}

        .splash {{
            position: fixed;
            inset: 0;
            z-index: 50;
            background: #000;
            display: flex;
            align-items: center;
            justify-content: center;
            overflow: hidden;
        }}
        .splash.is-hidden {{
            animation: fade-out 0.4s ease-out 0.6s forwards;
            pointer-events: none;
        }}
        .splash-icon {{
            position: relative;
            width: 6rem;
            height: 6rem;
        }}
        .splash-core {{
            position: absolute;
            inset: 0;
            border-radius: 9999px;
            background: #fff;
            color: #000;
            display: flex;
            align-items: center;
            justify-content: center;
            font-size: 2.25rem;
            font-weight: 700;
            transform: scale(0.8);
        }}
        .splash-ring {{
            position: absolute;
            inset: 0;
            border-radius: 9999px;
            border: 2px solid rgba(255, 255, 255, 0.3);
            opacity: 0;
            --ring-from: 0.8;
            --ring-to: 1.3;
        }}
        .splash-ring.secondary {{
            border-color: rgba(255, 255, 255, 0.2);
            --ring-from: 0.9;
            --ring-to: 1.4;
        }}
        .splash.icon-revealed .splash-core {{
            animation: pulse-scale 0.6s {spring} forwards;
        }}
        .splash.icon-revealed .splash-ring {{
            animation: ring-out 0.6s ease-out forwards;
        }}

        .menu {{
            position: fixed;
            left: 0;
            right: 0;
            bottom: 0;
            z-index: 40;
            background: #000;
            border-top: 1px solid rgba(255, 255, 255, 0.1);
            transform: translateY(100%);
            opacity: 0;
        }}
        .menu.is-visible {{
            animation: slide-up 0.5s {spring} {menu_delay_ms}ms forwards;
        }}
        .menu-inner {{
            max-width: 56rem;
            margin: 0 auto;
            padding: 2rem 1.5rem;
        }}
        .menu h2 {{
            font-size: 1.5rem;
            margin: 0 0 1.5rem;
        }}
        .menu nav button {{
            display: block;
            width: 100%;
            text-align: left;
            padding: 0.75rem 1rem;
            margin-bottom: 1rem;
            border: none;
            border-radius: 0.5rem;
            background: transparent;
            color: inherit;
            font: inherit;
            cursor: pointer;
            transition: background-color 0.2s;
        }}
        .menu nav button:hover {{ background: rgba(255, 255, 255, 0.05); }}
        .menu footer {{
            margin-top: 2rem;
            padding-top: 1.5rem;
            border-top: 1px solid rgba(255, 255, 255, 0.1);
            font-size: 0.875rem;
            color: rgba(255, 255, 255, 0.6);
        }}

        main {{
            padding: 2rem 0 16rem;
        }}
        .landing {{
            max-width: 56rem;
            margin: 0 auto;
            padding: 3rem 1.5rem;
        }}
        .card-grid {{
            display: grid;
            grid-template-columns: repeat(3, minmax(0, 1fr));
            gap: 1.5rem;
        }}
        .hero-card {{
            grid-column: 1 / -1;
            padding: 2rem;
            border-radius: 1rem;
            border: 1px solid rgba(255, 255, 255, 0.1);
            background: linear-gradient(to bottom right, rgba(255, 255, 255, 0.05), rgba(255, 255, 255, 0));
            transition: border-color 0.3s;
        }}
        .hero-card:hover {{ border-color: rgba(255, 255, 255, 0.2); }}
        .hero-card h1 {{
            font-size: 3rem;
            margin: 0 0 1rem;
        }}
        .hero-card p {{
            font-size: 1.125rem;
            color: rgba(255, 255, 255, 0.7);
            margin: 0 0 1.5rem;
        }}
        .cta {{
            background: #fff;
            color: #000;
            border: none;
            border-radius: 9999px;
            padding: 0.75rem 2rem;
            font-weight: 600;
            font-size: 1rem;
            cursor: pointer;
        }}
        .cta:hover {{ background: rgba(255, 255, 255, 0.9); }}
        .feature-card {{
            padding: 1.5rem;
            border-radius: 0.75rem;
            border: 1px solid rgba(255, 255, 255, 0.1);
            background: rgba(255, 255, 255, 0.05);
            transition: all 0.3s;
        }}
        .feature-card:hover {{
            border-color: rgba(255, 255, 255, 0.2);
            background: rgba(255, 255, 255, 0.1);
        }}
        .feature-icon {{ font-size: 1.875rem; margin-bottom: 1rem; }}
        .feature-card h3 {{ font-size: 1.125rem; margin: 0 0 0.5rem; }}
        .feature-card p {{ font-size: 0.875rem; color: rgba(255, 255, 255, 0.6); margin: 0; }}
        .getting-started {{
            margin-top: 4rem;
            padding: 2rem;
            border-radius: 1rem;
            border: 1px solid rgba(255, 255, 255, 0.1);
            background: rgba(255, 255, 255, 0.05);
        }}
        .getting-started h2 {{ font-size: 1.5rem; margin: 0 0 1rem; }}
        .getting-started ul {{
            list-style: none;
            padding: 0;
            margin: 0;
            color: rgba(255, 255, 255, 0.7);
        }}
        .getting-started li {{ display: flex; align-items: flex-start; margin-bottom: 0.75rem; }}
        .getting-started .check {{ color: #4ade80; margin-right: 0.75rem; }}
        .getting-started code {{
            background: rgba(255, 255, 255, 0.1);
            padding: 0.25rem 0.5rem;
            border-radius: 0.25rem;
        }}

        @media (max-width: 1024px) {{
            .card-grid {{ grid-template-columns: repeat(2, minmax(0, 1fr)); }}
        }}
        @media (max-width: 768px) {{
            .card-grid {{ grid-template-columns: minmax(0, 1fr); }}
            .hero-card h1 {{ font-size: 2.25rem; }}
        }}
    "#,
        spring = SPRING_EASING,
        menu_delay_ms = menu_delay_ms,
    )
}
