use std::sync::atomic::Ordering;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::time;

use super::HomeScreen;
use super::ScreenStatus;
use crate::domain::models::fakes::status_error;
use crate::domain::models::fakes::ScriptedService;
use crate::domain::models::AlertMessage;
use crate::domain::models::Event;
use crate::domain::models::Plant;
use crate::domain::models::SessionContext;
use crate::domain::services::HomeState;

fn session() -> SessionContext {
    return SessionContext::new("42").unwrap();
}

fn apply_events(state: &mut HomeState, rx: &mut mpsc::UnboundedReceiver<Event>) {
    while let Ok(event) = rx.try_recv() {
        match event {
            Event::PlantsLoaded(plants) => state.handle_plants_loaded(plants),
            Event::AlertReceived(alert) => state.handle_alert(alert),
            _ => (),
        }
    }
}

#[tokio::test(start_paused = true)]
async fn it_fetches_plants_and_polls_alerts_while_active() -> Result<()> {
    let (service, boxed) = ScriptedService::default()
        .push_plants(Ok(vec![Plant::new("Ficus", "F. elastica", "healthy")]))
        .push_alert(Ok(Some(AlertMessage::new("Water plant 3"))))
        .boxed();
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let mut state = HomeState::default();
    let mut screen = HomeScreen::new(boxed, Duration::from_secs(20));

    state.activate();
    screen.activate(session(), tx)?;
    assert_eq!(screen.status(), ScreenStatus::Active);

    time::sleep(Duration::from_secs(21)).await;
    apply_events(&mut state, &mut rx);

    assert_eq!(state.plants.plants().len(), 1);
    assert_eq!(state.current_alert().unwrap().message, "Water plant 3");
    assert_eq!(service.plant_calls.load(Ordering::SeqCst), 1);

    state.deactivate();
    screen.deactivate().await?;
    assert_eq!(screen.status(), ScreenStatus::Inactive);

    return Ok(());
}

#[tokio::test(start_paused = true)]
async fn it_refuses_to_activate_twice() -> Result<()> {
    let (_service, boxed) = ScriptedService::default().boxed();
    let (tx, _rx) = mpsc::unbounded_channel::<Event>();
    let mut screen = HomeScreen::new(boxed, Duration::from_secs(20));

    screen.activate(session(), tx.clone())?;
    assert!(screen.activate(session(), tx).is_err());

    screen.deactivate().await?;
    screen.deactivate().await?;

    return Ok(());
}

#[tokio::test(start_paused = true)]
async fn it_stops_all_ticks_after_deactivation() -> Result<()> {
    let (service, boxed) = ScriptedService::default()
        .with_delay(Duration::from_secs(5))
        .push_alert(Ok(Some(AlertMessage::new("Water plant 3"))))
        .push_alert(Ok(Some(AlertMessage::new("Water plant 3"))))
        .boxed();
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let mut screen = HomeScreen::new(boxed, Duration::from_secs(20));

    screen.activate(session(), tx)?;

    // The first poll starts at 20s and is still waiting on the server at 22s.
    time::sleep(Duration::from_secs(22)).await;
    screen.deactivate().await?;
    time::sleep(Duration::from_secs(120)).await;

    let mut alerts = 0;
    while let Ok(event) = rx.try_recv() {
        if let Event::AlertReceived(_) = event {
            alerts += 1;
        }
    }

    assert_eq!(alerts, 0);
    assert_eq!(service.alert_calls.load(Ordering::SeqCst), 1);

    return Ok(());
}

#[tokio::test(start_paused = true)]
async fn it_keeps_the_previous_list_when_a_refetch_fails() -> Result<()> {
    let (service, boxed) = ScriptedService::default()
        .push_plants(Ok(vec![Plant::new("Ficus", "F. elastica", "healthy")]))
        .push_plants(Err(status_error("/plants", 500)))
        .boxed();
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let mut state = HomeState::default();
    let mut screen = HomeScreen::new(boxed, Duration::from_secs(20));

    state.activate();
    screen.activate(session(), tx.clone())?;
    time::sleep(Duration::from_secs(1)).await;
    apply_events(&mut state, &mut rx);
    screen.deactivate().await?;

    screen.activate(session(), tx)?;
    time::sleep(Duration::from_secs(1)).await;
    apply_events(&mut state, &mut rx);
    screen.deactivate().await?;

    assert_eq!(service.plant_calls.load(Ordering::SeqCst), 2);
    assert_eq!(
        state.plants.plants(),
        &[Plant::new("Ficus", "F. elastica", "healthy")]
    );

    return Ok(());
}
