//! Fixed geometry, colors and UI text

use image::Rgb;

pub const APP_TITLE: &str = "เครื่องมือวาดเส้นบน Nomograph Chart";
pub const UPLOAD_LABEL: &str = "อัปโหลดรูปภาพกราฟของคุณ";
pub const DROP_HINT: &str = "หรือลากไฟล์ PNG / JPEG มาวางในหน้าต่างนี้";
pub const CAPTION: &str = "Nomograph พร้อมเส้นการอ่านค่า";
pub const INSTRUCTIONS: &str =
    "ปรับแถบเลื่อนทางซ้ายเพื่อให้เส้นสีแดงตรงกับแกนและ Turning Line บนกราฟ";
pub const EMPTY_HINT: &str = "👆 กรุณาอัปโหลดภาพ Nomograph เพื่อเริ่มต้นใช้งาน";

pub const LABEL_START_X: &str = "จุดเริ่มต้น แกน X (MR)";
pub const LABEL_TOP_Y: &str = "ความสูงจุดตัดที่ 1 (DSB)";
pub const LABEL_MID_X: &str = "จุดตัดที่ 2 แกน X (E_SB)";
pub const LABEL_TURN_Y: &str = "ความสูงของ Turning Line";
pub const LABEL_END_X: &str = "จุดสิ้นสุด แกน X (k)";
pub const LABEL_BASE_Y: &str = "จุดเริ่มแกน Y (ขอบล่าง)";

pub const START_X_FRACTION: f64 = 0.25;
pub const TOP_Y_FRACTION: f64 = 0.30;
pub const MID_X_FRACTION: f64 = 0.65;
pub const TURN_Y_FRACTION: f64 = 0.60;
pub const END_X_FRACTION: f64 = 0.75;
pub const BASE_Y_FRACTION: f64 = 0.85;

/// Stroke width of every guide segment, in image pixels.
pub const STROKE_WIDTH: u32 = 5;
/// Length of the arrowhead along the final segment.
pub const ARROW_SIZE: i32 = 15;
pub const GUIDE_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

pub const WINDOW_SIZE: [f32; 2] = [1200.0, 800.0];
pub const SIDE_PANEL_WIDTH: f32 = 320.0;
