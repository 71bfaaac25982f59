use super::fixture_loader::{FixtureCase, FixtureResult, load_cases};
/// Query fixture runner
///
/// Parses every fixture input, compares the pairs, then rebuilds and compares
/// the output string.
use urlquery::{Charset, EmptySegments, ParseOptions, QueryPair, QueryPairs};

fn charset_for(label: Option<&str>) -> Charset {
    label.map_or(Charset::NONE, |label| {
        Charset::for_label(label).expect("fixture charset label")
    })
}

pub fn run_fixtures(cases: Vec<FixtureCase>) -> FixtureResult {
    let mut result = FixtureResult::new();
    let mut case_num = 0;

    for case in cases {
        let FixtureCase::QueryCase {
            input,
            charset,
            strict,
            keep_empty,
            pairs,
            output,
            failure,
        } = case
        else {
            continue;
        };
        case_num += 1;

        let charset = charset_for(charset.as_deref());
        let options = if keep_empty {
            ParseOptions::new().empty_segments(EmptySegments::Keep)
        } else {
            ParseOptions::new()
        };

        let parsed = match QueryPairs::parse_with(&input, charset, options) {
            Ok(parsed) if failure => {
                result.fail(case_num, &input, "parsing", "failure".into(), parsed.to_string());
                continue;
            }
            Ok(parsed) => parsed,
            Err(err) if failure => {
                if err.is_decode_error() {
                    result.passed += 1;
                } else {
                    result.fail(case_num, &input, "error", "decode error".into(), err.to_string());
                }
                continue;
            }
            Err(err) => {
                result.fail(case_num, &input, "parsing", "success".into(), err.to_string());
                continue;
            }
        };

        let expected_pairs: Vec<QueryPair> = pairs
            .into_iter()
            .map(|(key, value)| QueryPair::from_parts(key, value))
            .collect();
        if parsed.as_slice() != expected_pairs.as_slice() {
            result.fail(
                case_num,
                &input,
                "pairs",
                format!("{expected_pairs:?}"),
                format!("{:?}", parsed.as_slice()),
            );
            continue;
        }

        if let Some(output) = output {
            let built = parsed.build(charset, strict);
            if built != output {
                result.fail(case_num, &input, "output", output, built);
                continue;
            }
        }

        result.passed += 1;
    }

    result
}

#[test]
fn test_query_fixtures() {
    let result = run_fixtures(load_cases());

    for failure in &result.failures {
        println!(
            "#{} {:?} [{}]: expected {:?}, got {:?}",
            failure.case_num, failure.input, failure.field, failure.expected, failure.actual
        );
    }
    println!("{}", result.summary());

    assert_eq!(result.failed, 0, "{}", result.summary());
    assert!(result.passed > 0);
}
