use serde::{Deserialize, Serialize};

use super::TimeMs;

/// A fabricated block. Nothing is hashed or mined; every field is drawn at random
/// except the id, which comes from the feed's counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub id: u64,
    pub hash: String,
    pub transactions: u32,
    pub mined_by: String,
    pub time: TimeMs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_json_field_names() {
        let block = Block {
            id: 3,
            hash: "0xabc123...".to_string(),
            transactions: 4,
            mined_by: "AuraMiner-7".to_string(),
            time: TimeMs::new(1000),
        };
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["minedBy"], "AuraMiner-7");
        assert_eq!(json["id"], 3);
        assert_eq!(json["time"], 1000);
    }
}
