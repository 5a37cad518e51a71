//! # Submission Flow
//!
//! Tests that fg-01 signing, fg-03 submission and fg-02 receipt
//! reconstruction work together.
//!
//! ```text
//! send_transaction → create_signer (fg-01)
//!                  → AccessNodeGateway::submit_transaction
//!                      (authorize + sign per role)
//!                  → wait_until_sealed
//!                  → ReceiptBuilder (fg-02)
//! ```

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use async_trait::async_trait;
    use fg_01_transaction_signing::{
        create_signer, AccountRole, BaseAccount, CompositeSignature, Signable,
    };
    use fg_03_transaction_gateway::{
        AccessNodeError, AccessNodeGateway, GatewayError, InMemoryAccessNode, ScriptArgument,
        TokenDescriptor, TransactionGatewayApi, TransactionGatewayService, TransactionRequest,
        TransferRequest, SIGNING_KEY_INDEX, TRANSFER_COMPUTE_LIMIT,
    };
    use k256::ecdsa::signature::hazmat::PrehashVerifier;
    use k256::ecdsa::{Signature, VerifyingKey};
    use parking_lot::Mutex;
    use rust_decimal::Decimal;
    use sha2::{Digest, Sha256};
    use shared_types::{
        AccountAddress, AccountIdentity, NetworkConfig, NetworkName, TransactionId,
        TransactionStatusPayload,
    };
    use std::str::FromStr;
    use std::sync::Arc;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn transfer(amount: &str) -> TransferRequest {
        flow_telemetry::init_test_tracing();
        TransferRequest {
            recipient: RECIPIENT.to_string(),
            from_wallet_address: SENDER.to_string(),
            amount: amount.to_string(),
            private_key: SENDER_PRIVATE_KEY.to_string(),
            token: TokenDescriptor::flow_token(NetworkName::Testnet),
        }
    }

    fn verify(signature: &CompositeSignature, message_hex: &str) -> bool {
        let signer = create_signer(
            SENDER_PRIVATE_KEY,
            AccountIdentity::new(address(SENDER), SIGNING_KEY_INDEX),
        )
        .unwrap();
        let mut sec1 = vec![0x04];
        sec1.extend(hex::decode(signer.public_key_hex()).unwrap());
        let key = VerifyingKey::from_sec1_bytes(&sec1).unwrap();

        let digest = Sha256::digest(hex::decode(message_hex).unwrap());
        let signature = Signature::from_slice(&hex::decode(&signature.signature).unwrap()).unwrap();
        key.verify_prehash(&digest, &signature).is_ok()
    }

    /// Access node that records what it was given. Status lookups always
    /// report pending.
    #[derive(Default)]
    struct RecordingAccessNode {
        accounts_seen: Mutex<Vec<BaseAccount>>,
        signatures: Mutex<Vec<CompositeSignature>>,
        scripts: Mutex<Vec<String>>,
        sealed: Mutex<Option<TransactionStatusPayload>>,
    }

    #[async_trait]
    impl AccessNodeGateway for RecordingAccessNode {
        async fn account_exists(&self, _address: &AccountAddress) -> Result<bool, AccessNodeError> {
            Ok(true)
        }

        async fn execute_script(
            &self,
            script: String,
            _arguments: Vec<ScriptArgument>,
        ) -> Result<serde_json::Value, AccessNodeError> {
            self.scripts.lock().push(script);
            Ok(serde_json::json!("0.0"))
        }

        async fn submit_transaction(
            &self,
            request: TransactionRequest,
        ) -> Result<TransactionId, AccessNodeError> {
            self.scripts.lock().push(request.script.clone());

            let roles = [
                (&request.proposer, AccountRole { proposer: true, ..AccountRole::default() }),
                (&request.payer, AccountRole { payer: true, ..AccountRole::default() }),
            ];
            let authorizers = request
                .authorizations
                .iter()
                .map(|auth| (auth, AccountRole { authorizer: true, ..AccountRole::default() }));

            for (auth, role) in roles.into_iter().chain(authorizers) {
                let authorized = auth.authorize(BaseAccount {
                    kind: Some("ACCOUNT".to_string()),
                    temp_id: Some("CURRENT_USER".to_string()),
                    sequence_num: Some(3),
                    role,
                    ..BaseAccount::default()
                });
                let signature = authorized
                    .sign(&Signable::new("deadbeef"))
                    .map_err(|e| AccessNodeError::Rejected(e.to_string()))?;

                self.accounts_seen.lock().push(authorized.account);
                self.signatures.lock().push(signature);
            }

            *self.sealed.lock() = Some(sealed_success());
            Ok(TransactionId::new("c0ffee".repeat(10) + "c0ff"))
        }

        async fn wait_until_sealed(
            &self,
            _tx_id: &TransactionId,
        ) -> Result<TransactionStatusPayload, AccessNodeError> {
            self.sealed
                .lock()
                .clone()
                .ok_or_else(|| AccessNodeError::Expired("never submitted".to_string()))
        }

        async fn get_transaction_status(
            &self,
            _tx_id: &TransactionId,
        ) -> Result<TransactionStatusPayload, AccessNodeError> {
            Ok(payload(1, 0, vec![]))
        }
    }

    // =============================================================================
    // INTEGRATION TESTS
    // =============================================================================

    #[tokio::test]
    async fn test_signer_passed_in_all_three_roles() {
        let node = Arc::new(RecordingAccessNode::default());
        let gateway = TransactionGatewayService::new(NetworkConfig::testnet(), Arc::clone(&node));

        let response = gateway.send_transaction(transfer("1")).await.unwrap();
        assert!(response.receipt.is_successful());

        let accounts = node.accounts_seen.lock().clone();
        assert_eq!(accounts.len(), 3);
        for account in &accounts {
            assert_eq!(account.addr.as_deref(), Some("73c05de1c4223787"));
            assert_eq!(account.key_id, Some(SIGNING_KEY_INDEX));
            assert_eq!(account.temp_id.as_deref(), Some("0x73c05de1c4223787-0"));
            // Untouched base fields
            assert_eq!(account.kind.as_deref(), Some("ACCOUNT"));
            assert_eq!(account.sequence_num, Some(3));
        }
        assert!(accounts[0].role.proposer);
        assert!(accounts[1].role.payer);
        assert!(accounts[2].role.authorizer);

        for signature in node.signatures.lock().iter() {
            assert_eq!(signature.address, SENDER);
            assert!(verify(signature, "deadbeef"));
        }
    }

    #[tokio::test]
    async fn test_transfer_script_targets_network_contracts() {
        let node = Arc::new(RecordingAccessNode::default());
        let gateway = TransactionGatewayService::new(NetworkConfig::testnet(), Arc::clone(&node));

        gateway.send_transaction(transfer("2.5")).await.unwrap();

        let scripts = node.scripts.lock().clone();
        assert_eq!(scripts.len(), 1);
        assert!(scripts[0].contains("import FlowToken from 0x7e60df042a9c0868"));
        assert!(scripts[0].contains("import FungibleToken from 0x9a0766d93b6608b7"));
        assert!(scripts[0].contains("/storage/flowTokenVault"));
        assert!(scripts[0].contains("/public/flowTokenReceiver"));
    }

    #[tokio::test]
    async fn test_in_memory_node_signatures_verify() {
        let node = Arc::new(InMemoryAccessNode::new().with_sealed_result(sealed_success()));
        let gateway = TransactionGatewayService::new(NetworkConfig::testnet(), Arc::clone(&node));

        let response = gateway.send_transaction(transfer("1.0")).await.unwrap();

        let submitted = node.submissions().pop().unwrap();
        assert_eq!(submitted.tx_id, *response.receipt.transaction_hash());
        assert_eq!(submitted.compute_limit, TRANSFER_COMPUTE_LIMIT);
        assert_eq!(
            submitted.arguments[1],
            ScriptArgument::UFix64("1.00000000".to_string())
        );
        assert!(verify(&submitted.proposer_signature, &submitted.message));
        assert!(verify(&submitted.payer_signature, &submitted.message));
        assert!(verify(&submitted.authorizer_signatures[0], &submitted.message));

        assert_eq!(response.receipt.amount(), Some(Decimal::ONE));
        assert_eq!(response.receipt.from(), Some(SENDER));
        assert_eq!(response.receipt.to(), Some(RECIPIENT));
    }

    #[tokio::test]
    async fn test_failed_transfer_reports_failure_receipt() {
        let node = Arc::new(InMemoryAccessNode::new().with_sealed_result(sealed_failure()));
        let gateway = TransactionGatewayService::new(NetworkConfig::testnet(), node);

        let receipt = gateway.send_transaction(transfer("1")).await.unwrap().receipt;

        assert!(receipt.is_failed());
        assert_eq!(
            receipt.gas_cost_in_crypto(),
            Some(Decimal::from_str("0.00000104").unwrap())
        );
    }

    #[tokio::test]
    async fn test_invalid_key_never_reaches_node() {
        let node = Arc::new(RecordingAccessNode::default());
        let gateway = TransactionGatewayService::new(NetworkConfig::testnet(), Arc::clone(&node));

        let mut request = transfer("1");
        request.private_key = "00".repeat(32);

        assert!(matches!(
            gateway.send_transaction(request).await,
            Err(GatewayError::Signing(_))
        ));
        assert!(node.scripts.lock().is_empty());
    }

    #[tokio::test]
    async fn test_wallet_validation_against_node() {
        let node = InMemoryAccessNode::new().with_account(address(SENDER));
        let gateway = TransactionGatewayService::new(NetworkConfig::testnet(), Arc::new(node));

        assert!(gateway.is_valid_wallet_address(SENDER).await);
        assert!(!gateway.is_valid_wallet_address(RECIPIENT).await);
        assert!(!gateway.is_valid_wallet_address("0x73c05de1c42237").await);
    }
}
