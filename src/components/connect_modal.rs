use dioxus::prelude::*;

use crate::connection::{ConnectionRequest, Permission};
use crate::notify::NoticeQueue;
use crate::wallet::{truncate_address, WalletInfo};

/// Approve-button transition. Guards on a missing selection, raises
/// the processing flag before the callback runs, and drops it again
/// only when the callback fails so the user can retry.
fn submit_approval(
    selected: Option<WalletInfo>,
    processing: &mut bool,
    notices: &mut NoticeQueue,
    approve: impl FnOnce(WalletInfo) -> Result<(), String>,
) {
    let Some(wallet) = selected else {
        notices.destructive("No Wallet Selected", "Select an account to connect with.");
        return;
    };
    let address = wallet.address.clone();
    *processing = true;
    match approve(wallet) {
        Ok(()) => log::info!("connection approved with {}", address),
        Err(err) => {
            log::warn!("connection approval failed: {}", err);
            notices.destructive("Connection Failed", err);
            *processing = false;
        }
    }
}

/// Cancel-button transition. Rejection cannot fail, so the flag never
/// comes back down; the parent replaces the dialog.
fn submit_rejection(processing: &mut bool, reject: impl FnOnce()) {
    *processing = true;
    reject();
}

/// Approval dialog for a dApp connection request: pick an account,
/// review the requested permissions, connect or cancel. The parent
/// owns the selection and performs the actual session work in
/// `onapprove`; an `Err` from it is surfaced as a notice and the
/// dialog becomes interactive again so the user can retry.
#[component]
pub fn ConnectModal(
    request: ConnectionRequest,
    wallets: Vec<WalletInfo>,
    selected: Option<WalletInfo>,
    notices: Signal<NoticeQueue>,
    onselect: EventHandler<WalletInfo>,
    onapprove: Callback<WalletInfo, Result<(), String>>,
    onreject: EventHandler<()>,
) -> Element {
    let mut notices = notices;
    let mut processing = use_signal(|| false);

    let app_name = request.display_name().to_string();
    let permissions: Vec<Permission> = request
        .permissions
        .iter()
        .map(|id| Permission::from_id(id))
        .collect();
    let selected_for_approve = selected.clone();
    let has_selection = selected.is_some();

    rsx! {
        div {
            class: "modal-backdrop",

            div {
                class: "modal-content connect-dialog",
                onclick: move |e| e.stop_propagation(),

                div { class: "app-header",
                    if let Some(icon) = request.app_icon.clone() {
                        img { class: "app-icon", src: "{icon}", alt: "{app_name}" }
                    } else {
                        div { class: "app-icon placeholder", "⬡" }
                    }
                    div { class: "app-identity",
                        h2 { class: "modal-title", "{app_name}" }
                        div { class: "app-origin", "{request.origin}" }
                    }
                }

                div { class: "info-message",
                    "This app wants to connect to your wallet."
                }

                div { class: "wallet-field",
                    label { "Connect with:" }
                    div { class: "wallet-list",
                        if wallets.is_empty() {
                            div { class: "info-message", "No wallets available" }
                        }
                        for wallet in wallets.clone() {
                            {
                                let is_selected = selected
                                    .as_ref()
                                    .is_some_and(|s| s.address == wallet.address);
                                let short = truncate_address(&wallet.address);
                                let row = wallet.clone();
                                rsx! {
                                    div {
                                        class: if is_selected { "wallet-row selected" } else { "wallet-row" },
                                        onclick: move |_| onselect.call(row.clone()),
                                        div { class: "wallet-name", "{wallet.name}" }
                                        div { class: "wallet-address", "{short}" }
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "wallet-field",
                    label { "This app would like to:" }
                    div { class: "permission-list",
                        for perm in permissions {
                            {
                                let glyph = perm.icon().glyph();
                                let text = perm.description();
                                rsx! {
                                    div { class: "permission-row",
                                        span { class: "permission-icon", "{glyph}" }
                                        span { class: "permission-text", "{text}" }
                                    }
                                }
                            }
                        }
                        div { class: "permission-row restriction",
                            span { class: "permission-icon", "🔒" }
                            span { class: "permission-text",
                                "This connection does not allow the app to transfer your tokens."
                            }
                        }
                    }
                }

                div { class: "trust-warning",
                    "⚠️ Only connect to sites and applications you trust."
                }

                div { class: "modal-buttons",
                    button {
                        class: "modal-button cancel",
                        disabled: processing(),
                        onclick: move |_| {
                            submit_rejection(&mut processing.write(), || onreject.call(()));
                        },
                        "Cancel"
                    }
                    button {
                        class: "modal-button primary",
                        disabled: processing() || !has_selection,
                        onclick: move |_| {
                            submit_approval(
                                selected_for_approve.clone(),
                                &mut processing.write(),
                                &mut notices.write(),
                                |wallet| onapprove.call(wallet),
                            );
                        },
                        if processing() { "Connecting..." } else { "Connect" }
                    }
                }
            }
        }
    }
}
