use thiserror::Error;

/// Represents configuration errors rejected when building options or a generator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Worker ID does not fit into the configured worker-id bits
    #[error("Worker ID {worker_id} is invalid. Maximum allowed value is {max}")]
    InvalidWorkerId { worker_id: u16, max: u16 },
    /// Bit widths are outside their supported ranges or too wide together
    #[error(
        "Bit widths are invalid: worker_id_bits={worker_id_bits} (1-15), seq_bits={seq_bits} (1-21), sum must be at most 22"
    )]
    InvalidBitWidths { worker_id_bits: u8, seq_bits: u8 },
    /// Maximum sequence does not fit into the sequence bits
    #[error("Max sequence {max_seq} does not fit into sequence bits. Maximum allowed value is {limit}")]
    SequenceOutOfRange { max_seq: u32, limit: u32 },
    /// Minimum sequence is greater than maximum sequence
    #[error("Min sequence {min_seq} is greater than max sequence {max_seq}")]
    InvertedSequenceBounds { min_seq: u32, max_seq: u32 },
    /// Base time is not a positive millisecond timestamp
    #[error("Base time {base_time} must be a positive Unix timestamp in milliseconds")]
    InvalidBaseTime { base_time: i64 },
    /// Base time lies after the current time of the generator's clock
    #[error("Base time {base_time} is later than the current time {now}")]
    BaseTimeInFuture { base_time: i64, now: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let invalid_worker = ConfigError::InvalidWorkerId {
            worker_id: 64,
            max: 63,
        };
        assert_eq!(
            invalid_worker.to_string(),
            "Worker ID 64 is invalid. Maximum allowed value is 63"
        );

        let inverted = ConfigError::InvertedSequenceBounds {
            min_seq: 10,
            max_seq: 5,
        };
        assert_eq!(
            inverted.to_string(),
            "Min sequence 10 is greater than max sequence 5"
        );

        let future = ConfigError::BaseTimeInFuture {
            base_time: 200,
            now: 100,
        };
        assert_eq!(
            future.to_string(),
            "Base time 200 is later than the current time 100"
        );
    }

    #[test]
    fn test_error_debug() {
        let err = ConfigError::InvalidBitWidths {
            worker_id_bits: 16,
            seq_bits: 10,
        };
        assert!(format!("{:?}", err).contains("InvalidBitWidths"));
    }

    #[test]
    fn test_error_clone() {
        let original = ConfigError::SequenceOutOfRange {
            max_seq: 100,
            limit: 63,
        };
        let cloned = original.clone();
        assert_eq!(original, cloned);
    }
}
