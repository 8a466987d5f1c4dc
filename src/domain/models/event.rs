use super::AlertMessage;
use super::Plant;

#[derive(Debug)]
pub enum Event {
    AlertReceived(AlertMessage),
    KeyboardCTRLC(),
    KeyboardDismiss(),
    PlantsLoaded(Vec<Plant>),
    UIResize(),
    UIScrollDown(),
    UIScrollUp(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UITick(),
}
