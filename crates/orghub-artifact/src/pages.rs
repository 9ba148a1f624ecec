//! Installer and index pages.

use crate::config::RenderConfig;
use crate::escape::escape_html;
use crate::naming;
use orghub_club::Club;

/// Renders the standalone installer page for one club.
///
/// The page references the club's manifest by its deterministic file name
/// and prints the no-install deep link. Every club-controlled field is
/// escaped before interpolation; the slug is inert by construction.
pub fn render_installer(club: &Club, config: &RenderConfig) -> String {
    let manifest_href = format!(
        "{}/{}",
        config.manifests_url_path,
        naming::manifest_file_name(&club.slug)
    );
    format!(
        r#"<!doctype html>
<html lang="{lang}">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Instaluj: {short_name}</title>
  <link rel="manifest" href="{manifest_href}">
  <meta name="theme-color" content="{theme_color}">
</head>
<body style="font-family:system-ui;padding:20px;background:{background_color};color:#fff;">
  <h2>{product} – {name}</h2>
  <p>Chrome: menu ⋮ → <b>Zainstaluj aplikację</b> (lub „Dodaj do ekranu głównego”).</p>
  <p>Po instalacji ta ikona zawsze otworzy klub <b>{short_name}</b>.</p>
  <hr style="opacity:.25">
  <p style="opacity:.85">Link do uruchomienia bez instalacji:<br>
    <code>{deep_link_base}/#clubId={slug}</code>
  </p>
</body>
</html>
"#,
        lang = config.lang,
        short_name = escape_html(&club.short_name),
        manifest_href = manifest_href,
        theme_color = escape_html(&club.theme_color),
        background_color = escape_html(&club.background_color),
        product = config.product_name,
        name = escape_html(&club.name),
        deep_link_base = config.deep_link_base,
        slug = club.slug,
    )
}

/// Renders the index page listing every club's installer.
///
/// Clubs appear in input order; there is no re-sorting here.
pub fn render_index(clubs: &[Club], config: &RenderConfig) -> String {
    let items = clubs
        .iter()
        .map(|club| {
            format!(
                r#"<li><a href="{path}/{file}">{name}</a></li>"#,
                path = config.install_url_path,
                file = naming::installer_file_name(&club.slug),
                name = escape_html(&club.name),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        r#"<!doctype html>
<html lang="{lang}">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Instalacja klubów — {product}</title>
</head>
<body style="font-family:system-ui;padding:20px;">
  <h2>Instalacja klubów {product}</h2>
  <ul>
    {items}
  </ul>
</body>
</html>
"#,
        lang = config.lang,
        product = config.product_name,
        items = items,
    )
}
