mod unit_reading_time;
mod unit_render_post_page;
