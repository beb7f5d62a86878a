//! Command pattern - đóng gói một request thành object
//!
//! Client chỉ biết tên command và danh sách arguments. [`CommandRegistry`]
//! map tên sang constructor của command tương ứng; tên không đăng ký
//! được resolve sang [`NoCommand`] (null object) thay vì báo lỗi.

use std::io::Write;

use crate::error::Result;

/// Số lượng "cũ" mà các order command giả lập đọc ra từ database.
const OLD_QUANTITY: u32 = 5;

/// Object có một thao tác duy nhất: execute.
pub trait Command {
    /// Tên command đã được resolve
    fn name(&self) -> &str;

    /// Thực thi command, ghi side effect ra `out`
    fn execute(&self, out: &mut dyn Write) -> Result<()>;
}

/// Command có tên và mô tả cố định, được dựng từ arguments của CLI.
pub trait OrderCommand: Command + Sized {
    const NAME: &'static str;
    const DESCRIPTION: &'static str;

    /// `args[0]` là tên command, `args[1]` là số lượng mới
    fn from_args(args: &[String]) -> Self;
}

fn new_quantity(args: &[String]) -> Option<String> {
    args.get(1).cloned()
}

/// Giả lập update database rồi ghi log thay đổi số lượng.
fn record_quantity_update(out: &mut dyn Write, new_qty: Option<&str>) -> Result<()> {
    writeln!(out, "Updated Database")?;
    writeln!(
        out,
        "Logging: Updated qty from {} to {}",
        OLD_QUANTITY,
        new_qty.unwrap_or("unspecified")
    )?;
    Ok(())
}

/// Tạo order mới
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOrder {
    new_qty: Option<String>,
}

impl Command for CreateOrder {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        record_quantity_update(out, self.new_qty.as_deref())
    }
}

impl OrderCommand for CreateOrder {
    const NAME: &'static str = "CreateOrder";
    const DESCRIPTION: &'static str = "Create Order";

    fn from_args(args: &[String]) -> Self {
        Self {
            new_qty: new_quantity(args),
        }
    }
}

/// Cập nhật số lượng của order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOrder {
    new_qty: Option<String>,
}

impl Command for UpdateOrder {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        record_quantity_update(out, self.new_qty.as_deref())
    }
}

impl OrderCommand for UpdateOrder {
    const NAME: &'static str = "UpdateQuantity";
    const DESCRIPTION: &'static str = "UpdateQuantity number";

    fn from_args(args: &[String]) -> Self {
        Self {
            new_qty: new_quantity(args),
        }
    }
}

/// Ship order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipOrder {
    new_qty: Option<String>,
}

impl Command for ShipOrder {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        record_quantity_update(out, self.new_qty.as_deref())
    }
}

impl OrderCommand for ShipOrder {
    const NAME: &'static str = "ShipOrder";
    const DESCRIPTION: &'static str = "Ship Order";

    fn from_args(args: &[String]) -> Self {
        Self {
            new_qty: new_quantity(args),
        }
    }
}

/// Null object: báo tên command không tồn tại, không bao giờ fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoCommand {
    requested: String,
}

impl NoCommand {
    pub const NAME: &'static str = "NoCommand";

    pub fn new(requested: impl Into<String>) -> Self {
        Self {
            requested: requested.into(),
        }
    }

    /// Tên mà client đã yêu cầu
    pub fn requested(&self) -> &str {
        &self.requested
    }
}

impl Command for NoCommand {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "No command named {}", self.requested)?;
        Ok(())
    }
}

/// Entry trong registry: metadata + constructor
#[derive(Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
    build: fn(&[String]) -> Box<dyn Command>,
}

impl CommandSpec {
    /// Dựng command từ arguments
    pub fn build(&self, args: &[String]) -> Box<dyn Command> {
        (self.build)(args)
    }
}

fn build_boxed<C: OrderCommand + 'static>(args: &[String]) -> Box<dyn Command> {
    Box::new(C::from_args(args))
}

/// Map từ tên command sang constructor, giữ thứ tự đăng ký.
#[derive(Clone, Default)]
pub struct CommandRegistry {
    specs: Vec<CommandSpec>,
}

impl CommandRegistry {
    /// Registry rỗng
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry với ba order command mặc định
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register::<CreateOrder>();
        registry.register::<UpdateOrder>();
        registry.register::<ShipOrder>();
        registry
    }

    /// Đăng ký một command; đăng ký lại cùng tên sẽ thay thế entry cũ
    pub fn register<C: OrderCommand + 'static>(&mut self) {
        let spec = CommandSpec {
            name: C::NAME,
            description: C::DESCRIPTION,
            build: build_boxed::<C>,
        };

        match self.specs.iter_mut().find(|s| s.name == spec.name) {
            Some(existing) => *existing = spec,
            None => self.specs.push(spec),
        }
        log::debug!("Registered command {}", C::NAME);
    }

    /// Tìm command theo tên (so khớp chính xác)
    pub fn lookup(&self, name: &str) -> Option<&CommandSpec> {
        self.specs.iter().find(|spec| spec.name == name)
    }

    /// Mô tả của các command đã đăng ký, theo thứ tự đăng ký
    pub fn descriptions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.specs.iter().map(|spec| spec.description)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Resolve `args[0]` thành command. Tên lạ (hoặc args rỗng) cho ra [`NoCommand`].
    pub fn parse(&self, args: &[String]) -> Box<dyn Command> {
        let name = args.first().map(String::as_str).unwrap_or_default();

        match self.lookup(name) {
            Some(spec) => spec.build(args),
            None => {
                log::debug!("No command registered as '{}'", name);
                Box::new(NoCommand::new(name))
            }
        }
    }

    /// In usage banner liệt kê mô tả của từng command
    pub fn write_usage(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Usage: patterns command CommandName [arguments]")?;
        writeln!(out, "Commands:")?;
        for description in self.descriptions() {
            writeln!(out, "    {}", description)?;
        }
        Ok(())
    }
}
