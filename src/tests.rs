use crate::shell::host::{InstanceState, PlatformHost, WindowChrome};
use crate::shell::lifecycle::{Lifecycle, LifecycleError, LifecycleEvent};
use crate::shell::Shell;
use std::{cell::RefCell, error::Error, fmt, rc::Rc};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Initialize(Option<InstanceState>),
    SetDecorFits(bool),
}

#[derive(Debug)]
struct InitFailure;

impl fmt::Display for InitFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "content surface allocation failed")
    }
}

impl Error for InitFailure {}

struct FakeChrome {
    decor_fits: bool,
    calls: Rc<RefCell<Vec<Call>>>,
}

impl WindowChrome for FakeChrome {
    fn set_decor_fits_system_windows(&mut self, fits: bool) {
        self.calls.borrow_mut().push(Call::SetDecorFits(fits));
        self.decor_fits = fits;
    }
    fn decor_fits_system_windows(&self) -> bool {
        self.decor_fits
    }
}

struct FakeHost {
    chrome: FakeChrome,
    calls: Rc<RefCell<Vec<Call>>>,
    fail_init: bool,
}

impl FakeHost {
    fn new() -> Self {
        let calls = Rc::new(RefCell::new(Vec::new()));
        FakeHost {
            chrome: FakeChrome {
                decor_fits: true,
                calls: calls.clone(),
            },
            calls,
            fail_init: false,
        }
    }

    fn failing() -> Self {
        let mut host = FakeHost::new();
        host.fail_init = true;
        host
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl PlatformHost for FakeHost {
    fn initialize(
        &mut self,
        prior: Option<InstanceState>,
    ) -> Result<(), Box<dyn Error + 'static>> {
        self.calls.borrow_mut().push(Call::Initialize(prior));
        if self.fail_init {
            return Err(Box::new(InitFailure));
        }
        Ok(())
    }

    fn window(&mut self) -> &mut dyn WindowChrome {
        &mut self.chrome
    }
}

#[test]
fn initialize_precedes_chrome_write() {
    let snapshot = InstanceState::from_bytes(vec![0xde, 0xad]);
    for prior in [None, Some(snapshot)] {
        let mut shell = Shell::new(FakeHost::new());
        shell.on_create(prior.clone()).unwrap();
        assert_eq!(
            shell.host().calls(),
            vec![Call::Initialize(prior), Call::SetDecorFits(false)]
        );
    }
}

#[test]
fn decor_no_longer_fits_after_create() {
    for prior in [None, Some(InstanceState::from_bytes(vec![1]))] {
        let mut shell = Shell::new(FakeHost::new());
        shell.on_create(prior).unwrap();
        assert!(!shell.host().chrome.decor_fits_system_windows());
        assert_eq!(shell.state(), Lifecycle::Created);
    }
}

#[test]
fn chrome_written_exactly_once_per_create() {
    let writes = |shell: &Shell<FakeHost>| {
        shell
            .host()
            .calls()
            .iter()
            .filter(|call| matches!(call, Call::SetDecorFits(_)))
            .count()
    };

    let mut shell = Shell::new(FakeHost::new());
    shell.on_create(None).unwrap();
    assert_eq!(writes(&shell), 1);

    // Full re-create is a new instance; the property holds again.
    let mut recreated = Shell::new(FakeHost::new());
    recreated
        .on_create(Some(InstanceState::from_bytes(vec![2])))
        .unwrap();
    assert_eq!(writes(&recreated), 1);
}

#[test]
fn failed_initialize_propagates_untouched_and_skips_chrome() {
    let mut shell = Shell::new(FakeHost::failing());
    let err = shell.on_create(None).unwrap_err();
    assert!(err.downcast_ref::<InitFailure>().is_some());
    assert_eq!(shell.host().calls(), vec![Call::Initialize(None)]);
    assert!(shell.host().chrome.decor_fits_system_windows());
    assert_eq!(shell.state(), Lifecycle::NotCreated);
}

#[test]
fn fresh_launch_sees_no_prior_state() {
    let (events_tx, events_rx) = flume::unbounded();
    events_tx.send(LifecycleEvent::Create(None)).unwrap();

    let mut shell = Shell::new(FakeHost::new());
    shell.pump(&events_rx).unwrap();

    assert_eq!(
        shell.host().calls(),
        vec![Call::Initialize(None), Call::SetDecorFits(false)]
    );
    assert_eq!(shell.state(), Lifecycle::Created);
}

#[test]
fn recreation_forwards_snapshot_verbatim() {
    let snapshot = InstanceState::from_bytes(vec![7, 1, 9, 0, 255]);
    let mut shell = Shell::new(FakeHost::new());
    shell.on_create(Some(snapshot.clone())).unwrap();
    assert_eq!(
        shell.host().calls(),
        vec![
            Call::Initialize(Some(snapshot)),
            Call::SetDecorFits(false)
        ]
    );
}

#[test]
fn duplicate_create_is_rejected_without_host_calls() {
    let mut shell = Shell::new(FakeHost::new());
    shell.on_create(None).unwrap();
    let before = shell.host().calls();

    let err = shell.on_create(None).unwrap_err();
    let err = err.downcast_ref::<LifecycleError>().unwrap();
    assert_eq!(
        *err,
        LifecycleError::Transition {
            state: Lifecycle::Created,
            event: "create",
        }
    );
    assert_eq!(shell.host().calls(), before);
}

#[test]
fn pump_drives_the_whole_lifecycle() {
    let (events_tx, events_rx) = flume::unbounded();
    for event in [
        LifecycleEvent::Create(None),
        LifecycleEvent::Start,
        LifecycleEvent::Resume,
        LifecycleEvent::Pause,
        LifecycleEvent::Stop,
        LifecycleEvent::Destroy,
    ] {
        events_tx.send(event).unwrap();
    }

    let mut shell = Shell::new(FakeHost::new());
    shell.pump(&events_rx).unwrap();

    assert_eq!(shell.state(), Lifecycle::Destroyed);
    // Only creation touches the host.
    assert_eq!(
        shell.host().calls(),
        vec![Call::Initialize(None), Call::SetDecorFits(false)]
    );
}

#[test]
fn pump_rejects_events_before_create() {
    let (events_tx, events_rx) = flume::unbounded();
    events_tx.send(LifecycleEvent::Start).unwrap();

    let mut shell = Shell::new(FakeHost::new());
    let err = shell.pump(&events_rx).unwrap_err();
    assert!(err.downcast_ref::<LifecycleError>().is_some());
    assert!(shell.host().calls().is_empty());
}

#[test]
fn instance_state_is_opaque_bytes() {
    let snapshot = InstanceState::from_bytes(vec![3, 2, 1]);
    assert_eq!(snapshot.as_bytes(), &[3, 2, 1]);
    assert_eq!(snapshot.clone().into_bytes(), vec![3, 2, 1]);
    assert_eq!(snapshot, InstanceState::from_bytes(vec![3, 2, 1]));
    assert_ne!(snapshot, InstanceState::from_bytes(vec![3, 2, 2]));
}
