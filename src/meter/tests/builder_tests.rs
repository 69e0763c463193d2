//! Tests for assembling a data meter
//!
//! A meter either exists with both collaborators bound or is never created.

#[cfg(test)]
mod tests {
    use crate::collaborators::{ManualEstimator, NoEstimate, NoObserver, TransferRecorder};
    use crate::meter::{BandwidthEstimator, DataMeter, DataMeterBuilder, MeterError};

    #[test]
    fn test_builder_with_both_collaborators() {
        let estimator = ManualEstimator::new(500_000);
        let recorder = TransferRecorder::<String>::new();

        let meter = DataMeter::builder()
            .estimator(&estimator)
            .observer(&recorder)
            .build()
            .expect("both collaborators supplied");

        assert_eq!(meter.bitrate_estimate(), 500_000);
    }

    #[test]
    fn test_builder_without_estimator_fails() {
        let result = DataMeterBuilder::<NoEstimate, NoObserver>::default()
            .observer(NoObserver)
            .build();
        assert_eq!(result.unwrap_err(), MeterError::MissingEstimator);
    }

    #[test]
    fn test_builder_without_observer_fails() {
        let result = DataMeterBuilder::<NoEstimate, NoObserver>::default()
            .estimator(NoEstimate)
            .build();
        assert_eq!(result.unwrap_err(), MeterError::MissingObserver);
    }

    #[test]
    fn test_empty_builder_reports_estimator_first() {
        let result = DataMeter::<NoEstimate, NoObserver>::builder().build();
        assert_eq!(result.unwrap_err(), MeterError::MissingEstimator);
    }

    #[test]
    fn test_try_from_parts() {
        assert!(DataMeter::try_from_parts(Some(NoEstimate), Some(NoObserver)).is_ok());
        assert_eq!(
            DataMeter::<NoEstimate, NoObserver>::try_from_parts(None, Some(NoObserver))
                .unwrap_err(),
            MeterError::MissingEstimator
        );
        assert_eq!(
            DataMeter::<NoEstimate, NoObserver>::try_from_parts(Some(NoEstimate), None)
                .unwrap_err(),
            MeterError::MissingObserver
        );
    }

    #[test]
    fn test_later_supply_replaces_earlier_one() {
        let meter = DataMeter::builder()
            .estimator(ManualEstimator::new(1))
            .estimator(ManualEstimator::new(2))
            .observer(NoObserver)
            .build()
            .unwrap();
        assert_eq!(meter.bitrate_estimate(), 2);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MeterError::MissingEstimator.to_string(),
            "data meter requires a bandwidth estimator"
        );
        assert_eq!(
            MeterError::MissingObserver.to_string(),
            "data meter requires a transfer observer"
        );
    }
}
