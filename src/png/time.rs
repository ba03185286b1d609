use chrono::{NaiveDate, NaiveDateTime};

use super::*;

/// Image last-modification time
///
/// Fields hold what was stored. Out of range values are clamped only when
/// the time is turned into a calendar date.
///
/// Spec: [tIME](https://www.w3.org/TR/png/#11tIME)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub struct tIME {
  pub year: u16,
  pub month: u8,
  pub day: u8,
  pub hour: u8,
  pub minute: u8,
  pub second: u8,
}
impl TryFrom<&[u8]> for tIME {
  type Error = PngError;
  #[inline]
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    check_length(ChunkTy::tIME, LengthRule::Exactly(7), data)?;
    let mut c = ByteCursor::new(data);
    let year = c.read_u16()?;
    let [month, day, hour, minute, second] = c.read_array()?;
    Ok(Self { year, month, day, hour, minute, second })
  }
}
impl tIME {
  /// The time as a calendar value, with each field clamped into range.
  ///
  /// A day past the end of its month becomes the month's last day, and a
  /// leap second becomes second 59.
  #[must_use]
  pub fn to_datetime(&self) -> Option<NaiveDateTime> {
    let month = u32::from(self.month.clamp(1, 12));
    let mut day = u32::from(self.day.clamp(1, 31));
    let date = loop {
      match NaiveDate::from_ymd_opt(i32::from(self.year), month, day) {
        Some(date) => break date,
        None if day > 28 => day -= 1,
        None => return None,
      }
    };
    date.and_hms_opt(
      u32::from(self.hour.min(23)),
      u32::from(self.minute.min(59)),
      u32::from(self.second.min(59)),
    )
  }
}
impl core::fmt::Display for tIME {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self.to_datetime() {
      Some(when) => write!(f, "{}", when.format("%A, %d %b %Y - %I:%M %p")),
      None => write!(
        f,
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        self.year, self.month, self.day, self.hour, self.minute, self.second
      ),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_formats_with_weekday() {
    let t = tIME::try_from(&[0x07, 0xD6, 1, 2, 15, 4, 5][..]).unwrap();
    assert_eq!(t.year, 2006);
    assert_eq!(t.to_string(), "Monday, 02 Jan 2006 - 03:04 PM");
  }

  #[test]
  fn test_clamps_fields() {
    let t = tIME { year: 2023, month: 2, day: 31, hour: 30, minute: 99, second: 60 };
    assert_eq!(t.to_string(), "Tuesday, 28 Feb 2023 - 11:59 PM");
    let t = tIME { year: 2024, month: 0, day: 0, hour: 0, minute: 0, second: 0 };
    assert_eq!(t.to_string(), "Monday, 01 Jan 2024 - 12:00 AM");
  }

  #[test]
  fn test_wrong_length() {
    assert!(matches!(
      tIME::try_from(&[0; 6][..]),
      Err(PngError::WrongChunkLength { expected: LengthRule::Exactly(7), actual: 6, .. })
    ));
  }
}
