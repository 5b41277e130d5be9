//! Joining test metadata with implementation results

use super::types::{ImplementationData, ImplementationReport, TestMetadata};

/// Annotate every test with the outcome of each implementation
///
/// The outcome list of each row is aligned with `implementations`. A test an
/// implementation did not report is `NotRun`, never `Failed`.
pub fn create_implementation_data(
    metadata: &[TestMetadata],
    implementations: &[ImplementationReport],
) -> Vec<ImplementationData> {
    metadata
        .iter()
        .map(|test| ImplementationData {
            metadata: test.clone(),
            implementations: implementations
                .iter()
                .map(|report| report.outcome(&test.identifier))
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::report::types::{ReqType, TestOutcome};

    fn test_metadata(id: &str) -> TestMetadata {
        TestMetadata {
            identifier: id.to_string(),
            title: id.to_uppercase(),
            description: "(No description)".to_string(),
            coverage: "Manifest".to_string(),
            creators: vec!["(Unknown)".to_string()],
            required: ReqType::Must,
            references: vec![],
        }
    }

    #[test]
    fn test_outcomes_align_with_implementations() {
        let metadata = vec![test_metadata("t1"), test_metadata("t2")];
        let reports = vec![
            ImplementationReport::new("A")
                .with_result("t1", Some(true))
                .with_result("t2", Some(false)),
            ImplementationReport::new("B").with_result("t2", Some(true)),
        ];

        let data = create_implementation_data(&metadata, &reports);

        assert_eq!(data.len(), 2);
        assert_eq!(data[0].metadata.identifier, "t1");
        assert_eq!(
            data[0].implementations,
            vec![TestOutcome::Passed, TestOutcome::NotRun]
        );
        assert_eq!(
            data[1].implementations,
            vec![TestOutcome::Failed, TestOutcome::Passed]
        );
    }

    #[test]
    fn test_no_implementations() {
        let data = create_implementation_data(&[test_metadata("t1")], &[]);
        assert!(data[0].implementations.is_empty());
    }
}
