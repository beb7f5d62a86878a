//! Observer pattern - quan hệ one-to-many giữa subject và observers
//!
//! [`Subject`] giữ tập observer riêng cho từng instance và đẩy state tới
//! tất cả observer đang attach mỗi lần [`Subject::notify`] được gọi.
//! Delivery là đồng bộ: khi `notify` return, mọi observer đã nhận state.
//!
//! Không có cam kết nào về thứ tự giữa các observer. Implementation hiện
//! tại duyệt theo thứ tự attach nhưng caller không nên dựa vào điều đó.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Capability nhận update từ một [`Subject`].
///
/// Chỉ type implement trait này mới attach được; thiếu capability là lỗi
/// lúc compile:
///
/// ```compile_fail
/// use std::rc::Rc;
/// use patterns_core::observer::Subject;
///
/// struct NotAnObserver;
///
/// let subject: Subject<u32> = Subject::new();
/// subject.attach(Rc::new(NotAnObserver));
/// ```
pub trait Observer<S> {
    fn update(&self, state: &S);
}

/// Subject quản lý observers và gửi notification.
///
/// Membership có set semantics theo identity của `Rc`: attach hai lần
/// cùng một observer chỉ giữ một entry.
pub struct Subject<S> {
    observers: RefCell<Vec<Rc<dyn Observer<S>>>>,
}

impl<S> Default for Subject<S> {
    fn default() -> Self {
        Self::new()
    }
}

fn same_observer<A: ?Sized, B: ?Sized>(a: &Rc<A>, b: &Rc<B>) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

impl<S> Subject<S> {
    /// Tạo subject mới với tập observer rỗng
    pub fn new() -> Self {
        Self {
            observers: RefCell::new(Vec::new()),
        }
    }

    /// Attach observer. Trả về `false` nếu observer đã được attach từ trước.
    pub fn attach(&self, observer: Rc<dyn Observer<S>>) -> bool {
        if self.is_attached(&observer) {
            return false;
        }
        self.observers.borrow_mut().push(observer);
        log::debug!("Observer attached ({} total)", self.observer_count());
        true
    }

    /// Detach observer. Detach một observer chưa attach là no-op.
    pub fn detach<O: ?Sized>(&self, observer: &Rc<O>) -> bool {
        let mut observers = self.observers.borrow_mut();
        let before = observers.len();
        observers.retain(|attached| !same_observer(attached, observer));
        let removed = observers.len() != before;
        if removed {
            log::debug!("Observer detached ({} remaining)", observers.len());
        }
        removed
    }

    pub fn is_attached<O: ?Sized>(&self, observer: &Rc<O>) -> bool {
        self.observers
            .borrow()
            .iter()
            .any(|attached| same_observer(attached, observer))
    }

    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }

    /// Detach tất cả observers
    pub fn detach_all(&self) {
        self.observers.borrow_mut().clear();
    }

    /// Gửi `state` tới mọi observer đang attach.
    ///
    /// Observer được phép attach/detach trong lúc nhận update; thay đổi đó
    /// chỉ có hiệu lực từ lần notify kế tiếp.
    pub fn notify(&self, state: &S) {
        let observers = self.observers.borrow().clone();
        for observer in observers {
            observer.update(state);
        }
    }

    /// Attach observer trong một scope; observer được detach khi guard bị drop.
    pub fn subscribe(&self, observer: Rc<dyn Observer<S>>) -> Subscription<'_, S> {
        self.attach(Rc::clone(&observer));
        Subscription {
            subject: self,
            observer,
        }
    }
}

/// Guard trả về từ [`Subject::subscribe`].
///
/// Drop guard sẽ detach observer, kể cả khi scope kết thúc do panic.
#[must_use = "dropping the subscription detaches the observer immediately"]
pub struct Subscription<'a, S> {
    subject: &'a Subject<S>,
    observer: Rc<dyn Observer<S>>,
}

impl<S> Drop for Subscription<'_, S> {
    fn drop(&mut self) {
        self.subject.detach(&self.observer);
    }
}

/// State của KPI subject tại một thời điểm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiSnapshot {
    pub open_tickets: i64,
    pub closed_tickets: i64,
    pub new_tickets: i64,
}

impl KpiSnapshot {
    /// Giá trị trước khi có update nào
    pub const UNSET: Self = Self::new(-1, -1, -1);

    pub const fn new(open_tickets: i64, closed_tickets: i64, new_tickets: i64) -> Self {
        Self {
            open_tickets,
            closed_tickets,
            new_tickets,
        }
    }
}

impl Default for KpiSnapshot {
    fn default() -> Self {
        Self::UNSET
    }
}

/// Concrete subject: ba counter của ticket dashboard
#[derive(Default)]
pub struct Kpis {
    state: Cell<KpiSnapshot>,
    subject: Subject<KpiSnapshot>,
}

impl Kpis {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_tickets(&self) -> i64 {
        self.state.get().open_tickets
    }

    pub fn closed_tickets(&self) -> i64 {
        self.state.get().closed_tickets
    }

    pub fn new_tickets(&self) -> i64 {
        self.state.get().new_tickets
    }

    pub fn snapshot(&self) -> KpiSnapshot {
        self.state.get()
    }

    /// Cập nhật ba counter rồi notify tất cả observers
    pub fn set_kpis(&self, open_tickets: i64, closed_tickets: i64, new_tickets: i64) {
        let snapshot = KpiSnapshot::new(open_tickets, closed_tickets, new_tickets);
        self.state.set(snapshot);
        self.subject.notify(&snapshot);
    }

    pub fn subject(&self) -> &Subject<KpiSnapshot> {
        &self.subject
    }

    pub fn attach(&self, observer: Rc<dyn Observer<KpiSnapshot>>) -> bool {
        self.subject.attach(observer)
    }

    pub fn detach<O: ?Sized>(&self, observer: &Rc<O>) -> bool {
        self.subject.detach(observer)
    }

    pub fn subscribe(
        &self,
        observer: Rc<dyn Observer<KpiSnapshot>>,
    ) -> Subscription<'_, KpiSnapshot> {
        self.subject.subscribe(observer)
    }
}

/// Bản sao các counter mà một observer đã nhận
#[derive(Debug)]
struct KpiMirror {
    label: &'static str,
    state: Cell<KpiSnapshot>,
    updates: Cell<usize>,
}

impl KpiMirror {
    fn new(label: &'static str) -> Self {
        Self {
            label,
            state: Cell::new(KpiSnapshot::UNSET),
            updates: Cell::new(0),
        }
    }

    fn store(&self, state: &KpiSnapshot) {
        self.state.set(*state);
        self.updates.set(self.updates.get() + 1);
    }
}

impl fmt::Display for KpiMirror {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.get();
        writeln!(f, "{} kpis:", self.label)?;
        writeln!(f, "Open tickets: {}", state.open_tickets)?;
        writeln!(f, "New tickets: {}", state.new_tickets)?;
        write!(f, "Closed tickets: {}", state.closed_tickets)
    }
}

/// Dashboard hiển thị KPI hiện tại
#[derive(Debug)]
pub struct CurrentKpis {
    mirror: KpiMirror,
}

impl Default for CurrentKpis {
    fn default() -> Self {
        Self {
            mirror: KpiMirror::new("Current"),
        }
    }
}

impl CurrentKpis {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tạo observer và attach luôn vào `kpis`
    pub fn attached_to(kpis: &Kpis) -> Rc<Self> {
        let observer = Rc::new(Self::new());
        kpis.attach(observer.clone());
        observer
    }

    /// State đã nhận ở lần update gần nhất
    pub fn state(&self) -> KpiSnapshot {
        self.mirror.state.get()
    }

    /// Số lần đã nhận update
    pub fn updates(&self) -> usize {
        self.mirror.updates.get()
    }
}

impl Observer<KpiSnapshot> for CurrentKpis {
    fn update(&self, state: &KpiSnapshot) {
        self.mirror.store(state);
        log::debug!("{}", self);
    }
}

impl fmt::Display for CurrentKpis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.mirror, f)
    }
}

/// Dashboard dự báo, nhận cùng dữ liệu với [`CurrentKpis`]
#[derive(Debug)]
pub struct ForecastKpis {
    mirror: KpiMirror,
}

impl Default for ForecastKpis {
    fn default() -> Self {
        Self {
            mirror: KpiMirror::new("Forecast"),
        }
    }
}

impl ForecastKpis {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attached_to(kpis: &Kpis) -> Rc<Self> {
        let observer = Rc::new(Self::new());
        kpis.attach(observer.clone());
        observer
    }

    pub fn state(&self) -> KpiSnapshot {
        self.mirror.state.get()
    }

    pub fn updates(&self) -> usize {
        self.mirror.updates.get()
    }
}

impl Observer<KpiSnapshot> for ForecastKpis {
    fn update(&self, state: &KpiSnapshot) {
        self.mirror.store(state);
        log::debug!("{}", self);
    }
}

impl fmt::Display for ForecastKpis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.mirror, f)
    }
}
