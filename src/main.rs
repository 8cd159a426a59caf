use dioxus::prelude::*;

mod components;
mod connection;
mod notify;
mod wallet;

use components::*;
use connection::ConnectionRequest;
use notify::NoticeQueue;
use wallet::WalletInfo;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    ConnectPopup {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

/// Stand-in data until the extension messaging layer delivers a live
/// request and the managed account list into the popup.
fn sample_request() -> ConnectionRequest {
    match serde_json::from_str(
        r#"{
            "appName": "Orca",
            "origin": "https://app.orca.example",
            "permissions": ["view_address", "view_balance", "call_methods"]
        }"#,
    ) {
        Ok(request) => request,
        Err(err) => {
            log::warn!("failed to parse sample connection request: {}", err);
            ConnectionRequest {
                app_name: None,
                app_icon: None,
                origin: "unknown".to_string(),
                permissions: vec![],
            }
        }
    }
}

fn sample_wallets() -> Vec<WalletInfo> {
    vec![
        WalletInfo::new("Main", "0x1234567890abcdef1234567890abcdef12345678"),
        WalletInfo::new("Savings", "0xabcdefabcdefabcdefabcdefabcdefabcdefabcd"),
        WalletInfo::new("Trading", "0x9f8e7d6c5b4a39281706f5e4d3c2b1a098765432"),
    ]
}

#[derive(Debug, Clone, PartialEq)]
enum PopupOutcome {
    Approved(WalletInfo),
    Rejected,
}

#[component]
fn ConnectPopup() -> Element {
    let notices = use_signal(NoticeQueue::default);
    let request = use_signal(sample_request);
    let wallets = use_signal(sample_wallets);
    let mut selected = use_signal(|| None as Option<WalletInfo>);
    let mut outcome = use_signal(|| None as Option<PopupOutcome>);

    let origin = request.read().origin.clone();

    rsx! {
        div { class: "popup",
            if let Some(PopupOutcome::Approved(wallet)) = outcome() {
                div { class: "outcome",
                    h2 { "Connected" }
                    div { class: "info-message",
                        "{origin} is now connected to {wallet.name}."
                    }
                }
            } else if outcome() == Some(PopupOutcome::Rejected) {
                div { class: "outcome",
                    h2 { "Request Rejected" }
                    div { class: "info-message", "No connection was made." }
                }
            } else {
                ConnectModal {
                    request: request(),
                    wallets: wallets(),
                    selected: selected(),
                    notices,
                    onselect: move |wallet: WalletInfo| selected.set(Some(wallet)),
                    onapprove: move |wallet: WalletInfo| {
                        log::info!("approving connection for {}", wallet.address);
                        outcome.set(Some(PopupOutcome::Approved(wallet)));
                        Ok(())
                    },
                    onreject: move |_| {
                        log::info!("connection request rejected");
                        outcome.set(Some(PopupOutcome::Rejected));
                    },
                }
            }
            Toasts { notices }
        }
    }
}
