use crate::error::AppResult;
use engine::theme::{ThemeId, ThemePalette, ThemeRegistry};

/// Directives and provenance header at the top of the generated file.
const HEADER: &str = "\
@tailwind base;
@tailwind components;
@tailwind utilities;

/**
 * Defesa Civil São Carlos - Design System
 *
 * IMPORTANTE: Este arquivo é gerado automaticamente a partir das
 * definições de tema (engine/themes/*.toml).
 *
 * Para modificar cores, edite os arquivos de tema e execute:
 * cargo run -p sentinela
 *
 * As variáveis CSS abaixo permitem a troca dinâmica de temas
 * (claro, escuro, alto contraste, monocromático) via JavaScript.
 */

@layer base {
";

/// Fixed accessibility and utility rules appended after the theme blocks.
/// Presentational components select against these exact names; the block is
/// a stable contract, not a place for per-theme data.
const BASE_RULES: &str = r"  /* Multiplicadores de Acessibilidade */
  :root {
    --font-size-multiplier: 1;
    --line-height-multiplier: 1.6;
    --radius: 0.5rem;
  }

  * {
    @apply border-border;
  }

  body {
    @apply bg-background text-foreground;
    font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
    font-size: calc(1rem * var(--font-size-multiplier));
    line-height: var(--line-height-multiplier);
  }

  /* Typography */
  h1, h2, h3, h4, h5, h6 {
    font-family: 'Poppins', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
    font-weight: 600;
    line-height: 1.2;
  }

  /* Dyslexia-friendly font option */
  .dyslexia-friendly {
    font-family: 'OpenDyslexic', 'Comic Sans MS', cursive !important;
  }

  /* Focus styles for accessibility */
  :focus-visible {
    outline: 2px solid hsl(var(--primary));
    outline-offset: 2px;
    border-radius: 0.25rem;
  }

  /* Skip to main content link */
  .skip-link {
    position: absolute;
    top: -40px;
    left: 6px;
    background: hsl(var(--primary));
    color: hsl(var(--primary-foreground));
    padding: 8px;
    border-radius: 4px;
    text-decoration: none;
    z-index: 1000;
    transition: top 0.3s;
  }

  .skip-link:focus {
    top: 6px;
  }

  /* Smooth scrolling */
  html {
    scroll-behavior: smooth;
  }

  /* Animation classes */
  .animate-fade-in-up {
    animation: fadeInUp 0.6s ease-out forwards;
    opacity: 0;
    transform: translateY(30px);
  }

  .animate-slide-in-right {
    animation: slideInRight 0.5s ease-out forwards;
    opacity: 0;
    transform: translateX(30px);
  }

  /* Custom utility classes */
  .emergency-pulse {
    --emergency-bg: var(--destructive);
    animation: emergencyPulse 2s infinite;
  }

  @keyframes emergencyPulse {
    0%, 100% {
      background-color: hsl(var(--emergency-bg));
      transform: scale(1);
    }
    50% {
      background-color: hsl(var(--emergency-bg) / 0.8);
      transform: scale(1.05);
    }
  }

  .bg-destructive-inverted.emergency-pulse {
    --emergency-bg: var(--destructive-inverted);
  }

  @keyframes fadeInUp {
    to {
      opacity: 1;
      transform: translateY(0);
    }
  }

  @keyframes slideInRight {
    to {
      opacity: 1;
      transform: translateX(0);
    }
  }

  /* Accessibility toolbar styles */
  .accessibility-toolbar {
    background: hsl(var(--card));
    border: 1px solid hsl(var(--border));
    box-shadow: var(--shadow-medium);
    border-radius: var(--radius);
  }

  /* Utility classes para acessibilidade */
  .text-accessible {
    font-size: calc(1rem * var(--font-size-multiplier));
    line-height: var(--line-height-multiplier);
  }

  h1, h2, h3, h4, h5, h6, p, li, a, button, label, span {
    font-size: calc(1em * var(--font-size-multiplier));
    line-height: var(--line-height-multiplier);
  }
}
";

/// Selector a theme's custom properties are scoped under. Light is the
/// document default; every other mode is activated by its class marker.
pub fn selector(id: ThemeId) -> String {
    match id.class_name() {
        None => ":root".to_string(),
        Some(class) => format!(".{class}"),
    }
}

/// One selector block with a property line per color role.
pub fn theme_block(selector: &str, palette: &ThemePalette) -> AppResult<String> {
    let mut block = format!("  {selector} {{\n");
    for (name, hsl) in palette.custom_properties()? {
        block.push_str(&format!("    --{name}: {hsl};\n"));
    }
    block.push_str("  }\n\n");
    Ok(block)
}

/// Render the complete stylesheet.
///
/// Output is byte-deterministic: themes are emitted in the registry's fixed
/// order, roles in palette declaration order, colors as integer-rounded HSL
/// triplets, and the surrounding rules are fixed strings.
pub fn generate(registry: &ThemeRegistry) -> AppResult<String> {
    let mut css = String::from(HEADER);

    for (id, theme) in registry.iter() {
        css.push_str(&theme_block(&selector(id), &theme.colors)?);
    }

    css.push_str(BASE_RULES);

    log::debug!("Generated stylesheet ({} bytes)", css.len());
    Ok(css)
}
