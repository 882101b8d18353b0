use std::{fs, path::Path};

use log::debug;

use crate::errors::{KeypairError, KeypairResult};

/// Resolves a source string into the integer list it denotes.
///
/// A source naming an existing file is read and parsed according to its
/// extension: `.json` as a JSON array, `.csv` as comma separated values
/// and anything else as whitespace and/or comma separated text. Any
/// other source is parsed as a list literal, e.g. `"[174, 47, ...]"`.
///
/// Values are returned as is. Range and length checks belong to the
/// encoding step so that a malformed list is still loadable.
pub fn load_list(source: &str) -> KeypairResult<Vec<i64>> {
    let path = Path::new(source);
    if !path.exists() {
        debug!("source is not a path, parsing as list literal");
        return parse_literal(source);
    }

    let text = fs::read_to_string(path)?;
    let text = text.trim();
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => {
            debug!("parsing {} as JSON array", path.display());
            parse_json(text)
        }
        Some("csv") => {
            debug!("parsing {} as CSV", path.display());
            parse_csv(text)
        }
        _ => {
            debug!("parsing {} as plain text", path.display());
            parse_plain(text)
        }
    }
}

// -----------------
// Parsers
// -----------------
fn parse_json(text: &str) -> KeypairResult<Vec<i64>> {
    Ok(serde_json::from_str(text)?)
}

fn parse_csv(text: &str) -> KeypairResult<Vec<i64>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut ints = Vec::new();
    for record in reader.records() {
        let record = record?;
        // Blank fields, e.g. from a trailing comma, are skipped
        for field in record.iter().filter(|field| !field.is_empty()) {
            ints.push(parse_int(field)?);
        }
    }
    Ok(ints)
}

fn parse_plain(text: &str) -> KeypairResult<Vec<i64>> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(parse_int)
        .collect()
}

fn parse_literal(source: &str) -> KeypairResult<Vec<i64>> {
    // json5 reads every number as f64 and truncates on a direct
    // integer target, so the narrowing is validated by hand
    let values: Vec<f64> = json5::from_str(source)?;
    values.into_iter().map(literal_to_int).collect()
}

fn literal_to_int(value: f64) -> KeypairResult<i64> {
    // i64::MIN casts exactly while i64::MAX rounds up to 2^63, so the
    // upper bound is exclusive
    const MIN: f64 = i64::MIN as f64;
    const MAX: f64 = i64::MAX as f64;
    if !value.is_finite()
        || value.fract() != 0.0
        || value < MIN
        || value >= MAX
    {
        return Err(KeypairError::NonIntegerValue(value));
    }
    Ok(value as i64)
}

fn parse_int(token: &str) -> KeypairResult<i64> {
    token
        .parse()
        .map_err(|err| KeypairError::InvalidInteger(token.to_string(), err))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_literal_lists() {
        assert_eq!(parse_literal("[1,2,3]").unwrap(), vec![1, 2, 3]);
        assert_eq!(
            parse_literal("[ 0, 255 , 128 ]").unwrap(),
            vec![0, 255, 128]
        );
        assert_eq!(parse_literal("[1, 2, 3,]").unwrap(), vec![1, 2, 3]);
        assert_eq!(parse_literal("[0x10, 0xff]").unwrap(), vec![16, 255]);
        // Out of range values load fine and fail during encoding
        assert_eq!(parse_literal("[-1, 300]").unwrap(), vec![-1, 300]);
    }

    #[test]
    fn test_literal_rejects_non_lists() {
        assert_matches!(
            parse_literal("42").unwrap_err(),
            KeypairError::Literal(_)
        );
        assert_matches!(
            parse_literal("some nonsense").unwrap_err(),
            KeypairError::Literal(_)
        );
        assert_matches!(
            parse_literal("[1, 2").unwrap_err(),
            KeypairError::Literal(_)
        );
        assert_matches!(
            parse_literal("[1, \"2\"]").unwrap_err(),
            KeypairError::Literal(_)
        );
    }

    #[test]
    fn test_literal_rejects_non_integer_values() {
        assert_matches!(
            parse_literal("[1.5]").unwrap_err(),
            KeypairError::NonIntegerValue(v) if v == 1.5
        );
        assert_matches!(
            parse_literal("[NaN, 0]").unwrap_err(),
            KeypairError::NonIntegerValue(v) if v.is_nan()
        );
        assert_matches!(
            parse_literal("[Infinity]").unwrap_err(),
            KeypairError::NonIntegerValue(_)
        );
        // Finite and integral but beyond i64
        assert_matches!(
            parse_literal("[1e300]").unwrap_err(),
            KeypairError::NonIntegerValue(_)
        );
    }

    #[test]
    fn test_plain_text_tokens() {
        assert_eq!(parse_plain("1 2\n3\t4").unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(parse_plain("1,2, 3 ,,4").unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(parse_plain("").unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn test_plain_text_rejects_bad_token() {
        assert_matches!(
            parse_plain("1 2 abc 4").unwrap_err(),
            KeypairError::InvalidInteger(token, _) if token == "abc"
        );
    }

    #[test]
    fn test_csv_fields() {
        assert_eq!(parse_csv("1,2,3, 4").unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(parse_csv("1,,2,").unwrap(), vec![1, 2]);
        assert_eq!(parse_csv("1,2\n3,4").unwrap(), vec![1, 2, 3, 4]);
        // Rows do not need to be of equal width
        assert_eq!(parse_csv("1,2,3\n4").unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_csv_rejects_bad_field() {
        assert_matches!(
            parse_csv("1,x,3").unwrap_err(),
            KeypairError::InvalidInteger(token, _) if token == "x"
        );
    }
}
