use super::*;
use std::sync::Mutex;

#[derive(Default)]
struct MockOps {
    calls: Mutex<Vec<&'static str>>,
}

impl TerminalOps for MockOps {
    fn setup(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("setup");
        Ok(())
    }

    fn restore(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("restore");
        Ok(())
    }
}

struct FailingSetup;

impl TerminalOps for FailingSetup {
    fn setup(&self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::Other, "no tty"))
    }

    fn restore(&self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn terminal_guard_restores_on_drop() {
    let ops = Arc::new(MockOps::default());
    {
        let _guard = TerminalGuard::with_ops(ops.clone()).unwrap();
    }

    assert_eq!(&*ops.calls.lock().unwrap(), &["setup", "restore"]);
}

#[test]
fn terminal_restorer_is_idempotent() {
    let ops = Arc::new(MockOps::default());
    let guard = TerminalGuard::with_ops(ops.clone()).unwrap();
    let restorer = guard.restorer();

    assert!(!restorer.is_restored());
    restorer.restore().unwrap();
    restorer.restore().unwrap();
    assert!(restorer.is_restored());
    drop(guard);

    assert_eq!(&*ops.calls.lock().unwrap(), &["setup", "restore"]);
}

#[test]
fn failed_setup_yields_no_guard() {
    assert!(TerminalGuard::with_ops(Arc::new(FailingSetup)).is_err());
}

#[test]
fn termination_signals_map_to_shell_exit_codes() {
    assert_eq!(TerminationSignal::SigInt.exit_code(), 130);
    assert_eq!(TerminationSignal::SigTerm.exit_code(), 143);
}
