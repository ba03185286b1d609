use super::*;

/// Pixel calibration: how sample values map to physical values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct pCAL {
  pub name: String,
  pub x0: i32,
  pub x1: i32,
  pub equation_type: u8,
  pub unit: String,
  pub parameters: Vec<String>,
}

impl pCAL {
  /// Name of an equation type, and how many parameters it usually takes.
  ///
  /// The stored parameter count is what's used when reading.
  #[must_use]
  pub const fn equation(equation_type: u8) -> Option<(&'static str, u8)> {
    Some(match equation_type {
      0 => ("linear", 2),
      1 => ("exponential", 3),
      2 => ("exponential arbitrary base", 4),
      3 => ("hyperbolic sinusoidal", 4),
      _ => return None,
    })
  }
}

impl TryFrom<&[u8]> for pCAL {
  type Error = PngError;
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    const TY: ChunkTy = ChunkTy::pCAL;
    let mut c = ByteCursor::new(data);
    let name = c.keyword(TY)?;
    let x0 = c.read_i32()?;
    let x1 = c.read_i32()?;
    let [equation_type, count] = c.read_array()?;
    if Self::equation(equation_type).is_none() {
      return Err(PngError::ValueOutOfRange {
        ty: TY,
        field: "equation type",
        value: u32::from(equation_type),
      });
    }
    let unit = c.latin1_field(TY)?;
    let mut parameters = Vec::with_capacity(usize::from(count));
    for i in 0..count {
      let field =
        if i + 1 == count { latin1_to_string(c.rest()) } else { c.latin1_field(TY)? };
      if !is_numeric_text(field.as_bytes()) {
        return Err(PngError::MalformedText { ty: TY, reason: "parameter is not a number" });
      }
      parameters.push(field);
    }
    Ok(Self { name, x0, x1, equation_type, unit, parameters })
  }
}
impl core::fmt::Display for pCAL {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let (equation, _) = Self::equation(self.equation_type).unwrap_or(("invalid", 0));
    writeln!(f)?;
    writeln!(f, "\tCalibration name = {}", self.name)?;
    writeln!(f, "\tLinear conversion = {} x {}", self.x0, self.x1)?;
    writeln!(f, "\tEquation type = {} ({equation})", self.equation_type)?;
    writeln!(f, "\tParameters = {}", self.parameters.len())?;
    writeln!(f, "\tUnit name = {}", OneLine(&self.unit))?;
    write!(f, "\tValues = {}", self.parameters.join(", "))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn payload(eq: u8, count: u8, params: &[&str]) -> Vec<u8> {
    let mut v = b"temperature\0".to_vec();
    v.extend_from_slice(&0_i32.to_be_bytes());
    v.extend_from_slice(&65535_i32.to_be_bytes());
    v.extend_from_slice(&[eq, count]);
    v.extend_from_slice(b"K\0");
    v.extend_from_slice(params.join("\0").as_bytes());
    v
  }

  #[test]
  fn test_linear() {
    let p = pCAL::try_from(payload(0, 2, &["0", "1.5e2"]).as_slice()).unwrap();
    assert_eq!(p.parameters, ["0", "1.5e2"]);
    assert_eq!(p.unit, "K");
    let text = p.to_string();
    assert!(text.contains("\tLinear conversion = 0 x 65535\n"));
    assert!(text.contains("\tEquation type = 0 (linear)\n"));
    assert!(text.ends_with("\tValues = 0, 1.5e2"));
  }

  #[test]
  fn test_count_is_taken_as_stored() {
    let p = pCAL::try_from(payload(0, 3, &["1", "2", "3"]).as_slice()).unwrap();
    assert_eq!(p.parameters, ["1", "2", "3"]);
    assert!(p.to_string().contains("\tParameters = 3\n"));
    let p = pCAL::try_from(payload(3, 1, &["-4"]).as_slice()).unwrap();
    assert_eq!(p.parameters, ["-4"]);
  }

  #[test]
  fn test_bad_calibration() {
    assert!(matches!(
      pCAL::try_from(payload(4, 2, &["0", "1"]).as_slice()),
      Err(PngError::ValueOutOfRange { field: "equation type", .. })
    ));
    assert!(matches!(
      pCAL::try_from(payload(0, 2, &["0", "x"]).as_slice()),
      Err(PngError::MalformedText { .. })
    ));
    assert!(matches!(
      pCAL::try_from(payload(0, 2, &["0"]).as_slice()),
      Err(PngError::MalformedText { .. })
    ));
  }
}
