/// Derives the url slug for a community from its display name: lowercased,
/// every run of non-alphanumeric characters folded into a single `-`, leading
/// and trailing dashes dropped.
pub fn slugify(name: &str) -> String {
  let mut slug = String::with_capacity(name.len());
  let mut last_was_dash = true;
  for c in name.chars() {
    if c.is_alphanumeric() {
      slug.extend(c.to_lowercase());
      last_was_dash = false;
    } else if !last_was_dash {
      slug.push('-');
      last_was_dash = true;
    }
  }
  while slug.ends_with('-') {
    slug.pop();
  }
  slug
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::slugify;

  #[test]
  fn test_slugify() {
    assert_eq!("rust-programming", slugify("Rust Programming"));
    assert_eq!("rust-lang", slugify("  Rust!!! Lang "));
    assert_eq!("c-and-c", slugify("C# and C++"));
    assert_eq!("서울-모임", slugify("서울 모임"));
    assert_eq!("", slugify("---"));
  }
}
