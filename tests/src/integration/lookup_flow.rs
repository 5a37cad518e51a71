//! # Lookup Flow
//!
//! Transaction lookup skips signing entirely: access node status goes
//! straight through the receipt builder.
//!
//! ```text
//! get_transaction(id) → AccessNodeGateway::get_transaction_status
//!                     → ReceiptBuilder (StatusDecoder + EventExtractor)
//!                     → TransactionResponse
//! ```

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use chrono::DateTime;
    use fg_02_receipt_reconstruction::{FixedTimeSource, ReceiptBuilder};
    use fg_03_transaction_gateway::{
        InMemoryAccessNode, TransactionGatewayApi, TransactionGatewayService,
    };
    use rust_decimal::Decimal;
    use shared_types::{NetworkConfig, TransactionId};
    use std::str::FromStr;
    use std::sync::Arc;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn gateway(
        node: InMemoryAccessNode,
    ) -> TransactionGatewayService<InMemoryAccessNode, FixedTimeSource> {
        flow_telemetry::init_test_tracing();
        let clock = FixedTimeSource(DateTime::from_timestamp(1_700_000_000, 0).unwrap());
        TransactionGatewayService::with_receipt_builder(
            Arc::new(node),
            ReceiptBuilder::with_time_source(NetworkConfig::testnet(), clock),
        )
    }

    fn tx_id(n: u8) -> TransactionId {
        TransactionId::new(format!("{:02x}", n).repeat(32))
    }

    // =============================================================================
    // INTEGRATION TESTS
    // =============================================================================

    #[tokio::test]
    async fn test_lookup_successful_transfer() {
        let gateway = gateway(InMemoryAccessNode::new().with_status(tx_id(1), sealed_success()));

        let response = gateway.get_transaction(&tx_id(1)).await.unwrap();
        let receipt = &response.receipt;

        assert!(receipt.is_successful());
        assert!(receipt.is_executed());
        assert_eq!(
            receipt.gas_cost_in_crypto(),
            Some(Decimal::from_str("0.00000259").unwrap())
        );
        assert_eq!(receipt.amount(), Some(Decimal::ONE));
        assert_eq!(receipt.from(), Some(SENDER));
        assert_eq!(receipt.to(), Some(RECIPIENT));
        assert_eq!(
            receipt.transaction_link(),
            format!("https://testnet.flowscan.org/transaction/{}", tx_id(1))
        );
        assert_eq!(response.transaction_data, sealed_success());
    }

    #[tokio::test]
    async fn test_lookup_failed_transaction() {
        let gateway = gateway(InMemoryAccessNode::new().with_status(tx_id(2), sealed_failure()));

        let receipt = gateway.get_transaction(&tx_id(2)).await.unwrap().receipt;

        assert!(receipt.is_failed());
        assert!(!receipt.is_successful());
        assert!(!receipt.is_executed());
        assert_eq!(
            receipt.gas_cost_in_crypto(),
            Some(Decimal::from_str("0.00000104").unwrap())
        );
        assert_eq!(receipt.from(), Some(SENDER));
        // The only withdrawal and deposit are the fee
        assert_eq!(receipt.amount(), None);
        assert_eq!(receipt.to(), None);
    }

    #[tokio::test]
    async fn test_lookup_pending_and_expired() {
        let node = InMemoryAccessNode::new()
            .with_status(tx_id(3), payload(1, 0, vec![]))
            .with_status(tx_id(4), payload(2, 0, vec![]))
            .with_status(tx_id(5), payload(5, 0, vec![]))
            .with_status(tx_id(6), payload(3, 0, vec![]));
        let gateway = gateway(node);

        let pending = gateway.get_transaction(&tx_id(3)).await.unwrap().receipt;
        let finalized = gateway.get_transaction(&tx_id(4)).await.unwrap().receipt;
        let expired = gateway.get_transaction(&tx_id(5)).await.unwrap().receipt;
        let executed = gateway.get_transaction(&tx_id(6)).await.unwrap().receipt;

        assert!(pending.is_pending());
        assert!(finalized.is_pending());
        assert!(expired.is_failed() && !expired.is_executed());
        assert!(executed.is_executed() && !executed.is_successful() && !executed.is_failed());
    }

    #[tokio::test]
    async fn test_receipt_json_contract() {
        let gateway = gateway(InMemoryAccessNode::new().with_status(
            tx_id(7),
            payload(4, 0, vec![event(FEES_DEDUCTED, serde_json::json!({"amount": "0.00000259"}))]),
        ));

        let response = gateway.get_transaction(&tx_id(7)).await.unwrap();
        let value = serde_json::to_value(&response).unwrap();
        let receipt = &value["receipt"];

        for key in [
            "transactionHash",
            "transactionLink",
            "network",
            "gasPrice",
            "gasLimit",
            "gasCostInCrypto",
            "gasCostCryptoCurrency",
            "amount",
            "from",
            "to",
            "nonce",
            "date",
            "isExecuted",
            "isSuccessful",
            "isFailed",
            "isInvalid",
            "isPending",
        ] {
            assert!(receipt.get(key).is_some(), "missing {}", key);
        }
        assert_eq!(receipt["isSuccessful"], true);
        assert_eq!(receipt["gasCostInCrypto"], "0.00000259");
        assert!(receipt["amount"].is_null());
        assert!(value["transactionData"]["events"].is_array());
    }

    #[tokio::test]
    async fn test_lookup_is_counted_in_metrics() {
        let metrics = flow_telemetry::register_metrics().unwrap();
        let gateway = gateway(InMemoryAccessNode::new().with_status(tx_id(9), sealed_failure()));

        gateway.get_transaction(&tx_id(9)).await.unwrap();

        let text = metrics.gather_text().unwrap();
        assert!(text.contains("fg_receipts_built_total{outcome=\"failed\"}"));
        assert!(text.contains("fg_receipt_fields_unavailable_total{field=\"amount\"}"));
    }

    #[tokio::test]
    async fn test_mainnet_gateway_uses_mainnet_links() {
        let gateway = TransactionGatewayService::new(
            NetworkConfig::mainnet(),
            Arc::new(InMemoryAccessNode::new().with_status(tx_id(8), sealed_success())),
        );

        let receipt = gateway.get_transaction(&tx_id(8)).await.unwrap().receipt;

        assert_eq!(receipt.network().as_str(), "mainnet");
        assert!(receipt
            .transaction_link()
            .starts_with("https://flowscan.org/transaction/"));
    }
}
