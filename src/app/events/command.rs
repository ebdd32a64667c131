/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Neuen Kontrollpunkt am Ende der Folge anhängen
    AddControlPoint { pos: glam::Vec2 },
    /// Kontrollpunkt entfernen (nachfolgende Indizes rücken auf)
    RemoveControlPoint { index: usize },
    /// Drag eines Kontrollpunkts beginnen
    BeginDrag { index: usize },
    /// Gezogenen Kontrollpunkt an Position setzen
    MoveDraggedPoint { pos: glam::Vec2 },
    /// Drag beenden
    EndDrag,
    /// Punktdurchmesser relativ ändern (geklemmt)
    AdjustPointDiameter { delta: i32 },
    /// Anwendung beenden
    RequestExit,
}
