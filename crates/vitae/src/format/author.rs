//! Author names and author lists.

use super::*;

/// Abbreviates "Last, First Middle" to "Last, F.~M.".
///
/// Given names are reduced to their initials and joined with `~` so TeX keeps
/// them on one line. Names without a comma (usually collaborations) are left as
/// they are.
///
/// ```
/// use vitae::format::author::abbreviate;
///
/// assert_eq!(abbreviate("Razo-López, Nicolás Bautista"), "Razo-López, N.~B.");
/// assert_eq!(abbreviate("Yarza, Ricardo"), "Yarza, R.");
/// assert_eq!(abbreviate("Event Horizon Telescope Collaboration"), "Event Horizon Telescope Collaboration");
/// ```
pub fn abbreviate(name: &str) -> String {
  let Some((last, given)) = name.split_once(',') else {
    return name.trim().to_string();
  };
  // Suffixes after a second comma ("Jr.") are dropped
  let given = given.split(',').next().unwrap_or_default();

  let initials = given
    .split_whitespace()
    .filter_map(|part| part.chars().next())
    .map(|initial| format!("{initial}."))
    .collect::<Vec<_>>();

  if initials.is_empty() {
    last.trim().to_string()
  } else {
    format!("{}, {}", last.trim(), initials.join("~"))
  }
}

/// Renders a full author list.
///
/// - One author is rendered alone.
/// - Up to `max_authors` authors are separated by `, ` with `, \& ` before the last.
/// - Longer lists keep the first `max_authors - 1` names followed by `et al.`; when that drops the
///   designated author, `\ incl.\ ` and their name are appended.
///
/// The designated author is set in bold and mentees are underlined, including when ADS lists
/// them with extra initials (see [`is_author`]). Emphasis is decided name by name.
pub fn author_list(authors: &[String], rules: &AuthorConfig) -> String {
  let names = authors.iter().map(|a| abbreviate(a)).collect::<Vec<_>>();
  let emph = |name: &String| emphasize(name, rules);
  let max = rules.max_authors.max(2);

  match names.as_slice() {
    [] => String::new(),
    [only] => emph(only),
    [rest @ .., last] if names.len() <= max => {
      format!("{}, \\& {}", rest.iter().map(emph).collect::<Vec<_>>().join(", "), emph(last))
    },
    _ => {
      let mut parts = names[..max - 1].iter().map(emph).collect::<Vec<_>>();
      parts.push("et al.".to_string());
      let mut list = parts.join(", ");

      match names.iter().position(|name| is_author(name, &rules.name)) {
        Some(position) if position >= max - 1 => {
          list.push_str(r"\ incl.\ ");
          list.push_str(&emph(&rules.name));
        },
        Some(_) => {},
        None => warn!("{} is not among the {} authors of a truncated list", rules.name, names.len()),
      }
      list
    },
  }
}

/// Wraps one rendered name in the markup it deserves.
///
/// Only the configured part of the name is wrapped; extra initials ADS has on
/// record stay outside, as in `\textbf{Yarza, R.}~A.`.
fn emphasize(name: &str, rules: &AuthorConfig) -> String {
  if let Some(rest) = matching_suffix(name, &rules.name) {
    return format!(r"\textbf{{{}}}{rest}", rules.name);
  }
  // The longest mentee wins so that mentee order never changes the output
  let mentee = rules
    .mentees
    .iter()
    .filter_map(|mentee| matching_suffix(name, mentee).map(|rest| (mentee, rest)))
    .max_by_key(|(mentee, _)| mentee.len());
  match mentee {
    Some((mentee, rest)) => format!(r"\underline{{{mentee}}}{rest}"),
    None => name.to_string(),
  }
}

/// Whether the rendered name `rendered` belongs to the person rendered as `name`.
///
/// A match is the name itself or the name followed by further initials.
///
/// ```
/// use vitae::format::author::is_author;
///
/// assert!(is_author("Yarza, R.", "Yarza, R."));
/// assert!(is_author("Yarza, R.~A.", "Yarza, R."));
/// assert!(!is_author("Yarza, Ro.", "Yarza, R."));
/// ```
pub fn is_author(rendered: &str, name: &str) -> bool { matching_suffix(rendered, name).is_some() }

/// What follows `name` in `rendered`, when `rendered` is `name` plus optional initials.
fn matching_suffix<'a>(rendered: &'a str, name: &str) -> Option<&'a str> {
  rendered.strip_prefix(name).filter(|rest| rest.is_empty() || rest.starts_with('~'))
}
