//! End-of-run summary.

use std::io::{self, Write};

use crate::models::{SampleSummary, WorkingEndpoint};
use crate::ui::{preview, Console, Status};

/// Characters of a sample title shown per working endpoint.
pub const TITLE_PREVIEW_CHARS: usize = 100;

/// Likely causes listed when nothing answered.
pub const NO_ENDPOINT_HINTS: [&str; 4] = [
    "DOAJ API is down",
    "API endpoints have changed",
    "Network/CORS issues",
    "Authentication required",
];

/// Print the working endpoints with a sample of what each returned, or the
/// hints when there are none.
pub fn print_summary<W: Write>(
    working: &[WorkingEndpoint],
    console: &mut Console<W>,
) -> io::Result<()> {
    console.blank()?;
    console.rule()?;
    console.status(Status::Summary, "SUMMARY")?;
    console.rule()?;

    if working.is_empty() {
        console.status(Status::Error, "No working DOAJ endpoints found!")?;
        console.line("This might indicate:")?;
        for hint in NO_ENDPOINT_HINTS {
            console.line(format!("- {}", hint))?;
        }
        return Ok(());
    }

    console.status(
        Status::Success,
        format!("Found {} working endpoint(s):", working.len()),
    )?;

    for (i, endpoint) in working.iter().enumerate() {
        console.blank()?;
        console.line(format!("{}. {}", i + 1, endpoint.config.description))?;
        console.field("   URL", &endpoint.config.url)?;
        console.field("   Params", &endpoint.config.params)?;

        if let Some(sample) = SampleSummary::from_data(&endpoint.data) {
            console.field("   Results", format!("{} articles found", sample.count))?;
            if let Some(title) = sample.title {
                console.field("   Sample title", preview(&title, TITLE_PREVIEW_CHARS))?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EndpointConfig, QueryParams};
    use serde_json::{json, Value};

    fn working(description: &str, data: Value) -> WorkingEndpoint {
        WorkingEndpoint {
            config: EndpointConfig::new(
                "https://doaj.org/api/search",
                QueryParams::new().with("q", "ancient rome").with("pageSize", 5u32),
                description,
            ),
            data,
        }
    }

    fn render(endpoints: &[WorkingEndpoint]) -> String {
        let mut console = Console::plain(Vec::new());
        print_summary(endpoints, &mut console).unwrap();
        String::from_utf8(console.into_inner()).unwrap()
    }

    #[test]
    fn test_empty_summary_prints_hints() {
        let text = render(&[]);
        let rule = "=".repeat(50);
        assert_eq!(
            text,
            format!(
                "\n{rule}\n📊 SUMMARY\n{rule}\n❌ No working DOAJ endpoints found!\n\
                 This might indicate:\n- DOAJ API is down\n- API endpoints have changed\n\
                 - Network/CORS issues\n- Authentication required\n"
            )
        );
    }

    #[test]
    fn test_summary_lists_endpoints_in_order() {
        let text = render(&[
            working("first", json!({"results": [{"bibjson": {"title": "X"}}]})),
            working("second", json!({"response": {"docs": [{"title": "Y"}]}})),
        ]);

        assert!(text.contains("✅ Found 2 working endpoint(s):"));
        let first = text.find("1. first").unwrap();
        let second = text.find("2. second").unwrap();
        assert!(first < second);
        assert!(text.contains("   URL: https://doaj.org/api/search"));
        assert!(text.contains("   Params: {'q': 'ancient rome', 'pageSize': 5}"));
        assert!(text.contains("   Results: 1 articles found\n   Sample title: X...\n"));
        assert!(text.contains("   Sample title: Y...\n"));
    }

    #[test]
    fn test_long_title_truncated_to_100_chars() {
        let title = "T".repeat(140);
        let text = render(&[working("long", json!({"results": [{"bibjson": {"title": title}}]}))]);

        let expected = format!("   Sample title: {}...\n", "T".repeat(100));
        assert!(text.contains(&expected));
        assert!(!text.contains(&"T".repeat(101)));
    }

    #[test]
    fn test_missing_titles() {
        let text = render(&[
            working("no bibjson", json!({"results": [{"id": "1"}]})),
            working("untitled doc", json!({"response": {"docs": [{"id": "2"}]}})),
        ]);

        let (first, second) = text.split_at(text.find("2. untitled doc").unwrap());
        assert!(first.contains("   Results: 1 articles found"));
        assert!(!first.contains("Sample title"));
        assert!(second.contains("   Sample title: No title..."));
    }

    #[test]
    fn test_unknown_shape_has_no_sample() {
        let text = render(&[working("bare", json!({"status": "ok"}))]);
        assert!(text.contains("1. bare"));
        assert!(!text.contains("Results:"));
    }
}
