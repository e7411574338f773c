//! Launch cycle and trigger binding for the demo's native-window button.

use leptos::spawn_local;
use window_host::{DevConsole, HostServices, WindowHostService};

/// Stable DOM id of the native-window launch trigger element.
pub const LAUNCH_TRIGGER_DOM_ID: &str = "openIcedWindow";

const LAUNCH_SUCCESS_MESSAGE: &str = "Iced window created successfully";
const LAUNCH_FAILURE_PREFIX: &str = "Failed to create iced window";

/// Outcome of one launch-binding installation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchBindingStatus {
    /// Click handler installed on the trigger element.
    Attached,
    /// The trigger element was absent from the document at bind time.
    TriggerMissing,
    /// No DOM document exists on this target.
    DomUnavailable,
}

/// Runs one full click cycle: issue the boundary call, await it, report the outcome.
///
/// Success writes one line to the informational channel; failure writes the opaque error
/// value to the error channel. The error is never rethrown, retried, or shown to the user.
pub async fn run_launch_cycle<W, C>(window_host: &W, console: &C)
where
    W: WindowHostService + ?Sized,
    C: DevConsole + ?Sized,
{
    match window_host.create_iced_window().await {
        Ok(()) => console.info(LAUNCH_SUCCESS_MESSAGE),
        Err(err) => console.error(&format!("{LAUNCH_FAILURE_PREFIX}: {err}")),
    }
}

/// Spawns one independent launch cycle on the page's event loop.
///
/// Every click spawns its own cycle; there is no de-duplication, queueing, or in-flight
/// tracking across spawns.
pub fn spawn_launch(host: HostServices) {
    spawn_local(async move {
        run_launch_cycle(host.window_host.as_ref(), host.console.as_ref()).await;
    });
}

/// Resolves the launch trigger element and installs its click handler.
///
/// An absent trigger is a silent no-op: no handler is installed, no call is ever issued,
/// and nothing is logged. The returned status exists for diagnostics and tests.
pub fn install_launch_binding(host: &HostServices) -> LaunchBindingStatus {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::{closure::Closure, JsCast};

        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return LaunchBindingStatus::DomUnavailable;
        };
        let Some(element) = document.get_element_by_id(LAUNCH_TRIGGER_DOM_ID) else {
            return LaunchBindingStatus::TriggerMissing;
        };
        let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
            return LaunchBindingStatus::TriggerMissing;
        };

        let host = host.clone();
        let handler = Closure::<dyn FnMut(web_sys::MouseEvent)>::wrap(Box::new(move |_| {
            spawn_launch(host.clone());
        }));
        element.set_onclick(Some(handler.as_ref().unchecked_ref()));
        // The trigger keeps its handler for the page lifetime.
        handler.forget();
        LaunchBindingStatus::Attached
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = host;
        LaunchBindingStatus::DomUnavailable
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::VecDeque, rc::Rc};

    use futures::channel::oneshot;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use pretty_assertions::assert_eq;
    use window_host::{
        ConsoleLevel, HostCapabilities, HostStrategy, MemoryDevConsole, MemoryWindowHostService,
        WindowHostFuture,
    };

    use super::*;

    #[test]
    fn success_cycle_logs_one_info_line_and_no_errors() {
        let service = MemoryWindowHostService::default();
        let console = MemoryDevConsole::default();

        block_on(run_launch_cycle(&service, &console));

        assert_eq!(service.call_count(), 1);
        assert_eq!(
            console.messages(ConsoleLevel::Info),
            vec!["Iced window created successfully".to_string()]
        );
        assert_eq!(console.messages(ConsoleLevel::Error), Vec::<String>::new());
    }

    #[test]
    fn failure_cycle_logs_one_error_line_containing_cause() {
        let service = MemoryWindowHostService::failing("window backend offline");
        let console = MemoryDevConsole::default();

        block_on(run_launch_cycle(&service, &console));

        assert_eq!(service.call_count(), 1);
        assert_eq!(console.messages(ConsoleLevel::Info), Vec::<String>::new());
        assert_eq!(
            console.messages(ConsoleLevel::Error),
            vec!["Failed to create iced window: window backend offline".to_string()]
        );
    }

    #[test]
    fn cycles_stay_independent_with_no_terminal_lockout() {
        let service = MemoryWindowHostService::default();
        let console = MemoryDevConsole::default();

        block_on(run_launch_cycle(&service, &console));
        service.set_outcome(Err("host went away".to_string()));
        block_on(run_launch_cycle(&service, &console));
        service.set_outcome(Ok(()));
        block_on(run_launch_cycle(&service, &console));

        assert_eq!(service.call_count(), 3);
        assert_eq!(console.entries().len(), 3);
        assert_eq!(console.messages(ConsoleLevel::Info).len(), 2);
        assert_eq!(console.messages(ConsoleLevel::Error).len(), 1);
    }

    /// Window host whose calls stay pending until the test resolves them explicitly.
    struct PendingWindowHost {
        receivers: RefCell<VecDeque<oneshot::Receiver<Result<(), String>>>>,
    }

    impl PendingWindowHost {
        fn with_pending(count: usize) -> (Rc<Self>, Vec<oneshot::Sender<Result<(), String>>>) {
            let mut senders = Vec::new();
            let mut receivers = VecDeque::new();
            for _ in 0..count {
                let (tx, rx) = oneshot::channel();
                senders.push(tx);
                receivers.push_back(rx);
            }
            let host = Rc::new(Self {
                receivers: RefCell::new(receivers),
            });
            (host, senders)
        }
    }

    impl WindowHostService for PendingWindowHost {
        fn create_iced_window<'a>(&'a self) -> WindowHostFuture<'a, Result<(), String>> {
            let receiver = self
                .receivers
                .borrow_mut()
                .pop_front()
                .expect("a scripted response for every call");
            Box::pin(async move { receiver.await.expect("sender kept alive") })
        }
    }

    #[test]
    fn log_order_follows_resolution_order_not_click_order() {
        let (service, mut senders) = PendingWindowHost::with_pending(3);
        let console = Rc::new(MemoryDevConsole::default());

        let mut pool = LocalPool::new();
        let spawner = pool.spawner();
        for _ in 0..3 {
            let service = service.clone();
            let console = console.clone();
            spawner
                .spawn_local(async move {
                    run_launch_cycle(service.as_ref(), console.as_ref()).await;
                })
                .expect("spawn cycle");
        }

        // All three calls are in flight before any response arrives.
        pool.run_until_stalled();
        assert!(service.receivers.borrow().is_empty());
        assert!(console.entries().is_empty());

        senders
            .remove(1)
            .send(Err("second click failed".to_string()))
            .expect("resolve second");
        pool.run_until_stalled();
        senders.remove(1).send(Ok(())).expect("resolve third");
        pool.run_until_stalled();
        senders.remove(0).send(Ok(())).expect("resolve first");
        pool.run_until_stalled();

        let messages: Vec<String> = console
            .entries()
            .into_iter()
            .map(|entry| entry.message)
            .collect();
        assert_eq!(
            messages,
            vec![
                "Failed to create iced window: second click failed".to_string(),
                "Iced window created successfully".to_string(),
                "Iced window created successfully".to_string(),
            ]
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn headless_binding_install_reports_dom_unavailable_without_side_effects() {
        let service = Rc::new(MemoryWindowHostService::default());
        let console = Rc::new(MemoryDevConsole::default());
        let host = HostServices {
            window_host: service.clone(),
            console: console.clone(),
            capabilities: HostCapabilities::browser(),
            host_strategy: HostStrategy::Browser,
        };

        assert_eq!(
            install_launch_binding(&host),
            LaunchBindingStatus::DomUnavailable
        );
        assert_eq!(service.call_count(), 0);
        assert!(console.entries().is_empty());
    }
}
