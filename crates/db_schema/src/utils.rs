use chrono::{DateTime, Duration, Utc};

pub fn now() -> DateTime<Utc> {
  Utc::now()
}

/// A refreshed `updated_at` must be strictly later than the previous one,
/// even when the clock has not visibly ticked between two writes.
pub fn refreshed(prev: DateTime<Utc>) -> DateTime<Utc> {
  let candidate = Utc::now();
  if candidate > prev {
    candidate
  } else {
    prev + Duration::microseconds(1)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn refreshed_is_strictly_later() {
    let prev = now();
    assert!(refreshed(prev) > prev);

    let future = now() + Duration::days(1);
    assert!(refreshed(future) > future);
  }
}
