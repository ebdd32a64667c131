/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
///
/// Alle Positionen liegen bereits in NDC vor.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Primäre Maustaste gedrückt (Punkt greifen oder neuen Punkt setzen)
    PrimaryPressed { pos: glam::Vec2 },
    /// Primäre Maustaste losgelassen
    PrimaryReleased,
    /// Mauszeiger bewegt
    PointerMoved { pos: glam::Vec2 },
    /// Sekundäre Maustaste gedrückt (Punkt unter dem Zeiger löschen)
    SecondaryPressed { pos: glam::Vec2 },
    /// Kontrollpunkte vergrößern
    PointSizeIncreaseRequested,
    /// Kontrollpunkte verkleinern
    PointSizeDecreaseRequested,
    /// Anwendung beenden
    ExitRequested,
}
