// ============================================================================
// USE VIEW MODEL - ViewModel en Rc<RefCell> + re-render forzado
// ============================================================================
// El estado mutable vive fuera de use_state para que los cambios síncronos
// (p.ej. is_submitting) sean visibles de inmediato en el siguiente evento.
// ============================================================================

use std::cell::{Ref, RefCell};
use std::rc::Rc;
use yew::prelude::*;

pub struct UseViewModelHandle<T> {
    view_model: Rc<RefCell<T>>,
    refresh: UseForceUpdateHandle,
}

impl<T> Clone for UseViewModelHandle<T> {
    fn clone(&self) -> Self {
        Self {
            view_model: self.view_model.clone(),
            refresh: self.refresh.clone(),
        }
    }
}

impl<T> UseViewModelHandle<T> {
    pub fn borrow(&self) -> Ref<'_, T> {
        self.view_model.borrow()
    }

    /// Muta el ViewModel y vuelve a renderizar
    pub fn update<R>(&self, updater: impl FnOnce(&mut T) -> R) -> R {
        let result = updater(&mut self.view_model.borrow_mut());
        self.refresh.force_update();
        result
    }
}

#[hook]
pub fn use_view_model<T, F>(init: F) -> UseViewModelHandle<T>
where
    T: 'static,
    F: FnOnce() -> T,
{
    let view_model = use_mut_ref(init);
    let refresh = use_force_update();
    UseViewModelHandle { view_model, refresh }
}
