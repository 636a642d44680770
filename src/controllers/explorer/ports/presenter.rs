use std::io;

use crate::controllers::explorer::data::frame::Frame;

pub trait ExplorerPresenterPort {
    fn present(&mut self, frame: &Frame) -> io::Result<()>;
}
