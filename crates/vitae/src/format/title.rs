//! TeX-friendly titles.

use super::*;

lazy_static! {
  /// Capital letters right before a colon
  static ref ACRONYM_COLON: Regex = Regex::new(r"([A-Z]+):").unwrap();
  /// Capital letters right before a period
  static ref ACRONYM_PERIOD: Regex = Regex::new(r"([A-Z]+)\.").unwrap();
  /// A pair of straight double quotes
  static ref QUOTED: Regex = Regex::new(r#""([^"]*)""#).unwrap();
  /// Inline math between dollar signs
  static ref INLINE_MATH: Regex = Regex::new(r"\$(.*?)\$").unwrap();
}

/// Rewrites a plain title into TeX.
///
/// The rules run in a fixed order:
///
/// 1. `\@` before a colon or period that follows capitals, so TeX does not treat an acronym as
///    the end of a sentence;
/// 2. straight double quotes become ``` ``…'' ```;
/// 3. `$…$` becomes `\( … \)`;
/// 4. en dashes, `Ż`, and unescaped `&` are spelled out;
/// 5. the configured `corrections` are applied as literal replacements.
///
/// Rendering is idempotent: feeding the output back in returns it unchanged.
///
/// ```
/// use vitae::format::title::tex_title;
///
/// let title = tex_title(r#"GRMHD: "Hot" flows around $10^6 M_\odot$ holes"#, &[]);
/// assert_eq!(title, r"GRMHD\@: ``Hot'' flows around \( 10^6 M_\odot \) holes");
/// assert_eq!(tex_title(&title, &[]), title);
/// ```
pub fn tex_title(title: &str, corrections: &[Correction]) -> String {
  let title = ACRONYM_COLON.replace_all(title, r"${1}\@:");
  let title = ACRONYM_PERIOD.replace_all(&title, r"${1}\@.");
  let title = QUOTED.replace_all(&title, "``${1}''");
  let title = INLINE_MATH.replace_all(&title, r"\( ${1} \)");

  let title = title.replace('–', "--").replace('Ż', r"\.{Z}");
  let mut title = escape_ampersands(&title);

  for Correction { from, to } in corrections {
    title = title.replace(from.as_str(), to);
  }

  trace!("Rendered title: {title}");
  title
}

/// Escapes every `&` not already preceded by a backslash.
fn escape_ampersands(text: &str) -> String {
  let mut escaped = String::with_capacity(text.len());
  let mut previous = None;
  for c in text.chars() {
    if c == '&' && previous != Some('\\') {
      escaped.push('\\');
    }
    escaped.push(c);
    previous = Some(c);
  }
  escaped
}

#[cfg(test)]
mod tests {
  use super::*;

  fn default_corrections() -> Vec<Correction> { FormatConfig::default().corrections }

  #[test]
  fn test_acronyms() {
    assert_eq!(tex_title("H-AMR: A New GPU Code", &[]), r"H-AMR\@: A New GPU Code");
    assert_eq!(
      tex_title("Tidal disruption in AGN. Part II", &[]),
      r"Tidal disruption in AGN\@. Part II"
    );
    // Every acronym is handled, not just the first
    assert_eq!(tex_title("TDE: not a SN.", &[]), r"TDE\@: not a SN\@.");
  }

  #[test]
  fn test_quotes() {
    assert_eq!(
      tex_title(r#"The "wet" and "dry" mergers"#, &[]),
      "The ``wet'' and ``dry'' mergers"
    );
  }

  #[test]
  fn test_inline_math() {
    assert_eq!(
      tex_title(r"Stars of $1.4$ M$_\odot$ and $\sim 10$ km", &[]),
      r"Stars of \( 1.4 \) M\( _\odot \) and \( \sim 10 \) km"
    );
  }

  #[test]
  fn test_character_corrections() {
    assert_eq!(tex_title("Thorne–Żytkow Objects", &[]), r"Thorne--\.{Z}ytkow Objects");
    assert_eq!(tex_title("Stars & Planets", &[]), r"Stars \& Planets");
    assert_eq!(tex_title(r"Stars \& Planets", &[]), r"Stars \& Planets");
  }

  #[test]
  fn test_configured_correction() {
    assert_eq!(
      tex_title(r"Accretion onto $1.4$ M$_\odot$ neutron stars", &default_corrections()),
      r"Accretion onto \( \qty{1.4}{\solarmass} \) neutron stars"
    );
  }

  #[test]
  fn test_unpaired_delimiters_left_alone() {
    assert_eq!(tex_title(r#"A 5" telescope costs $5"#, &[]), r#"A 5" telescope costs $5"#);
  }

  #[test]
  fn test_idempotent() {
    let corrections = default_corrections();
    let titles = [
      r#"H-AMR: "Hot" & Cold Flows in AGN. Around $1.4$ M$_\odot$ Thorne–Żytkow Objects"#,
      "A perfectly ordinary title",
      r"Already \& escaped \( x \) math",
      "Stars && Planets",
    ];
    for title in titles {
      let once = tex_title(title, &corrections);
      assert_eq!(tex_title(&once, &corrections), once, "not idempotent for {title:?}");
    }
  }
}
