//! # Cadence Templates
//!
//! Script and transaction source for the token operations the gateway
//! performs. Templates are filled from a [`TokenDescriptor`] and the
//! network's FungibleToken contract address.

use super::entities::TokenDescriptor;
use shared_types::AccountAddress;

/// Read-only script returning the UFix64 balance of `account`.
pub fn balance_script(token: &TokenDescriptor, fungible_token: &AccountAddress) -> String {
    format!(
        r#"import {id} from {contract}
import FungibleToken from {ft}

pub fun main(account: Address): UFix64 {{
    let vaultRef = getAccount(account)
        .getCapability({balance_path})
        .borrow<&{id}.Vault{{FungibleToken.Balance}}>()
        ?? panic("Could not borrow Balance reference to the Vault")
    return vaultRef.balance
}}
"#,
        id = token.identifier,
        contract = token.contract_address,
        ft = fungible_token,
        balance_path = token.balance_path,
    )
}

/// Transaction moving `amount` from the signer's vault to `recipient`.
pub fn transfer_script(token: &TokenDescriptor, fungible_token: &AccountAddress) -> String {
    format!(
        r#"import {id} from {contract}
import FungibleToken from {ft}

transaction(recipient: Address, amount: UFix64) {{
    prepare(signer: AuthAccount) {{
        let sender = signer.borrow<&{id}.Vault>(from: {storage_path})
            ?? panic("Could not borrow Provider reference to the Vault")

        let receiver = getAccount(recipient)
            .getCapability({receiver_path})
            .borrow<&{id}.Vault{{FungibleToken.Receiver}}>()
            ?? panic("Could not borrow Receiver reference to the Vault")

        receiver.deposit(from: <- sender.withdraw(amount: amount))
    }}
}}
"#,
        id = token.identifier,
        contract = token.contract_address,
        ft = fungible_token,
        storage_path = token.storage_path,
        receiver_path = token.receiver_path,
    )
}
