use std::cell::Cell;
use std::rc::Rc;

/// Señal de vigencia para trabajo asíncrono ligado a una pantalla montada.
/// Los clones comparten la señal: el destructor del efecto la apaga y toda
/// respuesta tardía (de efectos o de callbacks) se descarta sin tocar estado.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CancelFlag(Rc<Cell<bool>>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arranca_vigente_y_se_apaga_una_vez() {
        let flag = CancelFlag::new();
        assert!(!flag.is_cancelled());
        flag.cancel();
        assert!(flag.is_cancelled());
    }

    #[test]
    fn los_clones_comparten_la_senal() {
        // La copia que viaja al futuro y la del destructor son la misma señal
        let flag = CancelFlag::new();
        let in_flight = flag.clone();
        flag.cancel();
        assert!(in_flight.is_cancelled());
    }
}
